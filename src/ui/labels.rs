pub const DAYS: &str = "days";
pub const HOURS: &str = "hours";
pub const MINUTES: &str = "minutes";
pub const SECONDS: &str = "seconds";

pub const CAPTION_PENDING: &str = "Until Trump leaves the White House";
pub const CAPTION_COMPLETE: &str = "Trump has left the White House";

pub const FIRST_PERIOD: &str = "Joe Biden";
pub const SECOND_PERIOD: &str = "Donald Trump";

pub const ELECTION_DAY: &str = "Election day: Nov 5, 2024";
pub const FIRST_TERM_END: &str = "Biden's term end: Jan 20, 2025";
pub const SECOND_TERM_END: &str = "Trump's term end: Jan 20, 2029";

pub const KEY_HINT: &str = " [q/Esc] Quit ";
