//! 入力値のデバウンス
//!
//! 時刻は呼び出し側から渡す（ミリ秒）。ブラウザではタイマーの発火時に
//! `take` で確定し、テストでは `poll` に仮想時刻を渡して検証する。

/// 末尾の値だけを確定させるデバウンサ
#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    delay_ms: u64,
    pending: Option<Pending<T>>,
    ticket: u64,
}

#[derive(Debug, Clone)]
struct Pending<T> {
    value: T,
    deadline_ms: u64,
    ticket: u64,
}

impl<T> Debouncer<T> {
    pub fn new(delay_ms: u64) -> Self {
        Self {
            delay_ms,
            pending: None,
            ticket: 0,
        }
    }

    /// 新しい値を積む。以前の未確定値は破棄され、期限は `now + delay` に延びる。
    ///
    /// 戻り値のチケットは `take` に渡す。
    pub fn push(&mut self, value: T, now_ms: u64) -> u64 {
        self.ticket += 1;
        self.pending = Some(Pending {
            value,
            deadline_ms: now_ms.saturating_add(self.delay_ms),
            ticket: self.ticket,
        });
        self.ticket
    }

    /// 期限を過ぎていれば値を確定して返す
    pub fn poll(&mut self, now_ms: u64) -> Option<T> {
        match &self.pending {
            Some(p) if now_ms >= p.deadline_ms => self.pending.take().map(|p| p.value),
            _ => None,
        }
    }

    /// チケットが最新のときだけ値を確定して返す
    ///
    /// 古いタイマーが遅れて発火しても値は出てこない。
    pub fn take(&mut self, ticket: u64) -> Option<T> {
        match &self.pending {
            Some(p) if p.ticket == ticket => self.pending.take().map(|p| p.value),
            _ => None,
        }
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}
