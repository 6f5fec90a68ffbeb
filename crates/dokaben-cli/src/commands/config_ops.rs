use std::fs;
use std::process;

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            process::exit(1);
        })
    };
}

pub fn settings_export() {
    print!("{}", dokaben_core::settings::default_toml());
}

pub fn settings_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let s = die!(
        dokaben_core::settings::parse_settings_toml(&content),
        "Error: {}"
    );
    println!(
        "OK: fling.min_distance={}, fling.min_velocity={}, shift.double_tap_ms={}, input.kigou_fallback={}",
        s.fling.min_distance, s.fling.min_velocity, s.shift.double_tap_ms, s.input.kigou_fallback
    );
}
