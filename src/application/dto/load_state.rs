//! # Load State DTO
//!
//! リモート呼び出しの進行状態（idle → loading → loaded | error）

/// リクエストの状態
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LoadState<T> {
    #[default]
    Idle,
    Loading,
    Loaded(T),
    /// エラーチェーンを結合したメッセージ
    Error(String),
}

impl<T> LoadState<T> {
    /// `anyhow::Result` を最終状態に変換
    pub fn from_result(result: anyhow::Result<T>) -> Self {
        match result {
            Ok(value) => LoadState::Loaded(value),
            Err(e) => LoadState::Error(error_chain_to_string(&e)),
        }
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, LoadState::Loaded(_))
    }

    pub fn is_error(&self) -> bool {
        matches!(self, LoadState::Error(_))
    }

    pub fn loaded(&self) -> Option<&T> {
        match self {
            LoadState::Loaded(value) => Some(value),
            _ => None,
        }
    }

    /// ペイロードを除いた状態
    pub fn phase(&self) -> LoadState<()> {
        match self {
            LoadState::Idle => LoadState::Idle,
            LoadState::Loading => LoadState::Loading,
            LoadState::Loaded(_) => LoadState::Loaded(()),
            LoadState::Error(message) => LoadState::Error(message.clone()),
        }
    }
}

/// Convert error chain to string including all causes
pub fn error_chain_to_string(e: &anyhow::Error) -> String {
    e.chain()
        .map(|cause| cause.to_string())
        .collect::<Vec<_>>()
        .join(" | ")
}
