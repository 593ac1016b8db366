use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Period {
    First,
    Second,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum DotState {
    Past(Period),
    Current(Period),
    Future(Period),
}

impl DotState {
    pub fn period(self) -> Period {
        match self {
            DotState::Past(p) | DotState::Current(p) | DotState::Future(p) => p,
        }
    }

    pub fn is_current(self) -> bool {
        matches!(self, DotState::Current(_))
    }
}

/// Classify dot `index` given where the first period ends and which day is
/// today. The current day wins over past/future.
pub fn classify(index: usize, first_period_days: i64, current_day_index: i64) -> DotState {
    let i = index as i64;
    let period = if i < first_period_days {
        Period::First
    } else {
        Period::Second
    };
    if i == current_day_index {
        DotState::Current(period)
    } else if i < current_day_index {
        DotState::Past(period)
    } else {
        DotState::Future(period)
    }
}

/// Lazily classified dot row. A clone continues from the same position; call
/// `TermProgress::dots` again for a fresh pass.
#[derive(Clone, Debug)]
pub struct Dots {
    next: usize,
    total: usize,
    first_period_days: i64,
    current_day_index: i64,
}

impl Dots {
    pub fn new(total: usize, first_period_days: i64, current_day_index: i64) -> Self {
        Self {
            next: 0,
            total,
            first_period_days,
            current_day_index,
        }
    }

    /// Index of the pulsing dot, if today falls inside the row.
    pub fn current_index(&self) -> Option<usize> {
        usize::try_from(self.current_day_index)
            .ok()
            .filter(|&i| i < self.total)
    }
}

impl Iterator for Dots {
    type Item = DotState;

    fn next(&mut self) -> Option<DotState> {
        if self.next >= self.total {
            return None;
        }
        let state = classify(self.next, self.first_period_days, self.current_day_index);
        self.next += 1;
        Some(state)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.total - self.next;
        (left, Some(left))
    }

    fn nth(&mut self, n: usize) -> Option<DotState> {
        self.next = self.next.saturating_add(n).min(self.total);
        self.next()
    }
}

impl ExactSizeIterator for Dots {}
