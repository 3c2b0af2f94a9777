mod series;
pub use self::series::{DailyBar, Metadata, QuoteSeries};

pub mod wire;
pub use self::wire::{RawDailyBar, RawDailyResponse, RawMetaData};

mod decode;
pub use self::decode::{
    convert_daily_bar, convert_entry, convert_meta_data, decode_daily_series, decode_with_policy,
    DecodePolicy, Decoded,
};
