mod history_toolbar;

pub use history_toolbar::HistoryToolbar;
