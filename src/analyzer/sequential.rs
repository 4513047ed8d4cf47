// src/analyzer/sequential.rs

/// Window length used by the analyzer.
pub const DEFAULT_WINDOW: usize = 3;

/// Detect a run of adjacent characters whose code points step by exactly
/// one, ascending ("abc", "123") or descending ("cba", "321"). Inputs
/// shorter than the window produce no windows and therefore no match.
pub fn has_sequential_run(password: &str, window: usize) -> bool {
    if window == 0 {
        return false;
    }
    let codes: Vec<u32> = password.chars().map(|c| c as u32).collect();
    codes.windows(window).any(|chunk| {
        let ascending = chunk
            .iter()
            .enumerate()
            .all(|(i, &c)| c == chunk[0] + i as u32);
        let descending = chunk
            .iter()
            .enumerate()
            .all(|(i, &c)| Some(c) == chunk[0].checked_sub(i as u32));
        ascending || descending
    })
}
