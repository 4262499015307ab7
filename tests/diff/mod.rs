mod colorized;
mod readable;
mod unified;
