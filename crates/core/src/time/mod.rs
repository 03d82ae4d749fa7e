mod window;

pub use window::{
    display_date, format_ymd, parse_ymd, today_local, trailing_window, DateWindow,
};
