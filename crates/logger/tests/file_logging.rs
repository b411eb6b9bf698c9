//! Tests for the verbose switch and the file sink.

use timeline_logger::{enable_verbose, error, info, verbose, warn};

#[cfg(feature = "verbose")]
#[test]
fn verbose_respects_runtime_flag() {
    use timeline_logger::{disable_verbose, is_verbose_enabled};

    disable_verbose();
    assert!(!is_verbose_enabled());
    verbose!("This should not appear");

    enable_verbose();
    assert!(is_verbose_enabled());
    verbose!("This should appear: verbose test {}", 42);
}

#[cfg(feature = "file-logging")]
#[test]
fn file_logging_writes_timestamped_tags() {
    use std::fs;
    use timeline_logger::{close_file_logging, init_file_logging, set_level, Level};

    let log_path = std::env::temp_dir().join(format!(
        "timeline_logger_{}.log",
        std::process::id()
    ));
    let _ = fs::remove_file(&log_path);

    set_level(Level::Info);
    assert!(init_file_logging(&log_path));

    info!("Test info message");
    warn!("Test warning message");
    error!("Test error message");

    enable_verbose();
    verbose!("This verbose message should NOT be in the file");

    close_file_logging();

    let contents = fs::read_to_string(&log_path).expect("Failed to read log file");
    assert!(contents.contains("[INFO] Test info message"));
    assert!(contents.contains("[WARN] Test warning message"));
    assert!(contents.contains("[ERROR] Test error message"));
    assert!(!contents.contains("verbose message"));

    // Every line starts with a YYYY-MM-DD date stamp
    for line in contents.lines() {
        let stamp = line.split(' ').next().unwrap_or_default();
        assert_eq!(stamp.len(), 10, "unexpected line: {line}");
        assert_eq!(stamp.matches('-').count(), 2);
    }

    let _ = fs::remove_file(&log_path);
}
