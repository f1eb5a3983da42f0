#![warn(
    missing_docs,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![deny(unsafe_code, unused_mut, unused_imports, unused_attributes)]

//! Модуль для инициализации глобального логгера на основе `tracing`.
//!
//! Консольный слой (stderr) доступен всегда; файловый слой с ежедневной
//! ротацией активируется фичей `logger_utils_feature`.

use tracing::Level;
use tracing_subscriber::{
    fmt,
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
    Layer,
};

use std::{io, path::Path};

#[cfg(feature = "logger_utils_feature")]
use std::fs;

use crate::error::UtilsError;

/// Строит `EnvFilter` из `RUST_LOG` (или уровня `info` по умолчанию)
/// с явной директивой уровня для текущего приложения.
fn build_env_filter(app_name: &str, level: Level) -> Result<EnvFilter, UtilsError> {
    let base = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    // EnvFilter не принимает дефисы в имени цели, приводим к виду имени крейта.
    let target = app_name.replace('-', "_");
    let directive = format!("{target}={level}").parse().map_err(|e| {
        UtilsError::InvalidParameter(format!(
            "Невалидная директива логирования для приложения '{app_name}': {e}"
        ))
    })?;
    Ok(base.add_directive(directive))
}

/// Инициализирует глобальный подписчик `tracing`.
///
/// Настраивает вывод в консоль (stderr) и, опционально, в файл с ежедневной
/// ротацией. Фильтрация: `RUST_LOG` плюс явные уровни для `app_name`.
///
/// # Аргументы
/// * `app_name` - Имя приложения (для фильтров и имени файла лога).
/// * `console_level` - Уровень для консоли.
/// * `file_level` - Уровень для файла (игнорируется без `log_dir`).
/// * `log_dir` - Опциональная директория для файлов логов.
///
/// # Ошибки
/// Возвращает `UtilsError::InvalidParameter` при невалидной директиве фильтра
/// и `UtilsError::Generic`, если глобальный подписчик уже установлен.
/// Проблемы с созданием директории логов приводят к отключению файлового слоя
/// (с предупреждением в stderr), но не к ошибке этой функции.
pub fn init_tracing_logger(
    app_name: &str,
    console_level: Level,
    file_level: Level,
    log_dir: Option<&Path>,
) -> Result<(), UtilsError> {
    // Слой для вывода в консоль (stderr).
    let console_layer = fmt::layer()
        .with_writer(io::stderr)
        .with_ansi(true)
        .pretty()
        .with_filter(build_env_filter(app_name, console_level)?);

    let mut layers: Vec<Box<dyn Layer<_> + Send + Sync + 'static>> = Vec::new();
    layers.push(console_layer.boxed());

    // Файловый слой: только при указанной директории и включенной фиче.
    #[cfg(feature = "logger_utils_feature")]
    let mut file_enabled = false;
    #[cfg(feature = "logger_utils_feature")]
    if let Some(dir) = log_dir {
        match fs::create_dir_all(dir) {
            Err(e) => {
                // tracing еще не инициализирован, поэтому eprintln!.
                eprintln!(
                    "[ПРЕДУПРЕЖДЕНИЕ] Не удалось создать директорию логов {dir:?}: {e}. Логирование в файл отключено."
                );
            }
            Ok(()) => {
                let file_appender =
                    tracing_appender::rolling::daily(dir, format!("{app_name}.log"));
                let file_layer = fmt::layer()
                    .with_writer(file_appender)
                    .with_ansi(false)
                    .with_filter(build_env_filter(app_name, file_level)?);
                layers.push(file_layer.boxed());
                file_enabled = true;
            }
        }
    }
    #[cfg(not(feature = "logger_utils_feature"))]
    let _ = (file_level, log_dir);

    tracing_subscriber::registry()
        .with(layers)
        .try_init()
        .map_err(|e| UtilsError::Generic(format!("Не удалось инициализировать логгер: {e}")))?;

    #[cfg(feature = "logger_utils_feature")]
    if file_enabled {
        tracing::info!(
            "Логгер инициализирован. Консоль: {console_level}, файл: {file_level} в {:?}.",
            log_dir
        );
        return Ok(());
    }

    tracing::info!("Логгер инициализирован. Только вывод в консоль (уровень {console_level}).");
    Ok(())
}
