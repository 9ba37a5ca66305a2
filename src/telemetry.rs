use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

pub use tracing_subscriber::util::TryInitError;

/// `RUST_LOG`が未設定のときに使うフィルタ
pub const DEFAULT_DIRECTIVES: &str = "rusty_library=info";

/// tracingのサブスクライバーを初期化する
///
/// `RUST_LOG`があればそれを優先し、なければ`default_directives`を使う。
/// 既に初期化済みの場合はエラーを返す（テストから複数回呼ばれても安全）。
pub fn init_tracing(default_directives: &str) -> Result<(), TryInitError> {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| default_directives.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .try_init()
}
