//! Homework review poller: fetches the latest submission status from the
//! Practicum API and forwards changes to Telegram.

pub mod client;
pub mod poller;
pub mod telemetry;

use homework_common::config::AppConfig;
use homework_notifier::TelegramNotifier;

use crate::client::PracticumClient;
use crate::poller::HomeworkPoller;

/// Wire the production client and notifier from a loaded configuration.
///
/// Both sides share one `reqwest::Client` connection pool.
pub fn build_poller(config: &AppConfig) -> HomeworkPoller<PracticumClient, TelegramNotifier> {
    let http = reqwest::Client::new();
    let client = PracticumClient::with_client(
        http.clone(),
        &config.practicum_endpoint,
        &config.practicum_token,
    );
    let notifier = TelegramNotifier::with_client(
        http,
        &config.telegram_api_url,
        &config.telegram_token,
        config.telegram_chat_id.clone(),
    );
    HomeworkPoller::new(client, notifier, config.retry_period)
}
