//! 非同期処理の状態
//!
//! 1件の検索リクエストのライフサイクル（未実行 / 読込中 / 成功 / 失敗）を表す。

/// 非同期結果
#[derive(Debug, Clone, PartialEq)]
pub enum AsyncData<T, E> {
    Idle,
    Loading,
    Ok(T),
    Error(E),
}

impl<T, E> Default for AsyncData<T, E> {
    fn default() -> Self {
        AsyncData::Idle
    }
}

impl<T, E> AsyncData<T, E> {
    /// 成功時のデータ、それ以外は `default`
    pub fn data_or(&self, default: T) -> T
    where
        T: Clone,
    {
        match self {
            AsyncData::Ok(data) => data.clone(),
            _ => default,
        }
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            AsyncData::Ok(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&E> {
        match self {
            AsyncData::Error(e) => Some(e),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, AsyncData::Loading)
    }

    pub fn is_error(&self) -> bool {
        matches!(self, AsyncData::Error(_))
    }
}

impl<T, E> From<Result<T, E>> for AsyncData<T, E> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(data) => AsyncData::Ok(data),
            Err(e) => AsyncData::Error(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_idle() {
        let data: AsyncData<Vec<u8>, String> = AsyncData::default();
        assert_eq!(data, AsyncData::Idle);
        assert!(!data.is_loading());
    }

    #[test]
    fn test_data_or() {
        let ok: AsyncData<Vec<u8>, String> = AsyncData::Ok(vec![1, 2]);
        let loading: AsyncData<Vec<u8>, String> = AsyncData::Loading;
        let error: AsyncData<Vec<u8>, String> = AsyncData::Error("x".into());

        assert_eq!(ok.data_or(vec![]), vec![1, 2]);
        assert_eq!(loading.data_or(vec![]), Vec::<u8>::new());
        assert_eq!(error.data_or(vec![9]), vec![9]);
    }

    #[test]
    fn test_from_result() {
        let failed: AsyncData<u8, &str> = Err("boom").into();
        assert!(failed.is_error());
        assert_eq!(failed.error(), Some(&"boom"));
        assert_eq!(failed.data(), None);

        let done: AsyncData<u8, &str> = Ok(3).into();
        assert_eq!(done.data(), Some(&3));
    }
}
