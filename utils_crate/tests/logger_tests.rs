use serial_test::serial;
use tempfile::tempdir;
use tracing::Level;
use utils_crate::logger::init_tracing_logger;

// Тесты инициализации глобального логгера конфликтуют между собой:
// глобальный подписчик `tracing` можно установить лишь один раз на процесс.
// Поэтому они выполняются последовательно, и только первый успешно
// установивший подписчик тест получает Ok; остальные проверяют, что
// повторная инициализация возвращает ошибку, а не панику.

#[test]
#[serial]
fn test_logger_init_console_only() {
    let result = init_tracing_logger("vit_classifier_test", Level::DEBUG, Level::INFO, None);
    if let Err(e) = result {
        // Повторная инициализация в рамках того же процесса допустима как ошибка.
        assert!(e.to_string().contains("логгер") || e.to_string().contains("Логгер"));
    }
    tracing::debug!("сообщение после инициализации логгера");
}

#[test]
#[serial]
fn test_logger_init_with_file_dir() {
    let dir = tempdir().unwrap();
    let result = init_tracing_logger(
        "vit_classifier_test",
        Level::INFO,
        Level::DEBUG,
        Some(dir.path()),
    );
    // Либо логгер установлен, либо он уже был установлен предыдущим тестом.
    if let Err(e) = result {
        assert!(e.to_string().contains("логгер") || e.to_string().contains("Логгер"));
    }
}

#[test]
#[serial]
fn test_logger_reinit_returns_error_not_panic() {
    // Первая инициализация может быть успешной или нет (в зависимости от порядка),
    // но вторая обязана вернуть ошибку.
    let _ = init_tracing_logger("vit_classifier_test", Level::INFO, Level::INFO, None);
    let second = init_tracing_logger("vit_classifier_test", Level::INFO, Level::INFO, None);
    assert!(second.is_err());
}
