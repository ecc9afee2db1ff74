//! The log file is truncated on start and receives one line per record.

use homework_poller::telemetry;

#[test]
fn test_init_truncates_and_writes_log_file() {
    let log_file = std::env::temp_dir().join(format!("homework-bot-{}.log", std::process::id()));
    std::fs::write(&log_file, "left over from a previous run\n").unwrap();

    let guard = telemetry::init(&log_file).unwrap();
    tracing::info!(target: "homework_poller", "Homework bot starting...");
    tracing::error!(target: "homework_poller", critical = true, "Bot malfunction during poll cycle");
    drop(guard);

    let contents = std::fs::read_to_string(&log_file).unwrap();
    std::fs::remove_file(&log_file).ok();

    assert!(!contents.contains("left over"));
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), 2, "{contents}");
    assert!(lines[0].contains("INFO") && lines[0].contains("homework_poller"));
    assert!(lines[0].contains("Homework bot starting..."));
    assert!(lines[1].contains("ERROR") && lines[1].contains("critical=true"));
}
