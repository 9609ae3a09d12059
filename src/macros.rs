/// Prints the per-download progress block to stdout.
/// ```
/// comic_mirror::progress!(1, "614", "https://imgs.example/a.png", "https://example/614/", "xkcd/614_a.png");
/// ```
#[macro_export]
macro_rules! progress {
    ($idx:expr, $num:expr, $img:expr, $page:expr, $file:expr) => {{
        println!(
            "done:\t{}\nnum:\t{}\nimg:\t{}\npage:\t{}\nfile:\t{}\n",
            $idx, $num, $img, $page, $file
        );
    }};
}

/// Prints the end-of-run summary with the total run time.
/// Expects `chrono::Local` to be in scope at the call site.
/// ```
/// use chrono::Local;
/// let start_time = Local::now();
/// comic_mirror::summary!(start_time, 42);
/// ```
#[macro_export]
macro_rules! summary {
    ($time:expr, $count:expr) => {{
        let run_time = (Local::now() - $time)
            .num_microseconds()
            .map(|n| n as f64 / 1_000_000.0)
            .unwrap_or(0.0);
        println!("\nall ({}) done!\nRUNTIME: {} sec", $count, run_time);
    }};
}
