/// Raw sentinel for "no observation" (in tenths)
pub const MISSING_SENTINEL: i32 = -9999;

/// Raw tokens are tenths of a degree Celsius or tenths of a millimetre
pub const VALUE_SCALE: f32 = 0.1;

/// The sentinel after tenths scaling, as it appears in observations
pub const MISSING_VALUE: f32 = MISSING_SENTINEL as f32 * VALUE_SCALE;

/// A record carries at most one token per possible day of the month
pub const MAX_DAYS_PER_RECORD: usize = 31;

/// Length of the year-month prefix (YYYYMM)
pub const YEAR_MONTH_LEN: usize = 6;

/// Length of the variable-type tag (PRCP, TAVG, TMIN, TMAX)
pub const VARIABLE_TAG_LEN: usize = 4;

/// Default station identifier (Wuhan, CHM00057679)
pub const DEFAULT_STATION_ID: &str = "CHM00057679";

/// Color policy: precipitation hue = floor(value * scale) + offset
pub const PRECIP_HUE_SCALE: f32 = 0.75;
pub const PRECIP_HUE_OFFSET: f32 = 180.0;

/// Color policy: average-temperature hue = floor(value * scale) + offset
pub const TEMP_HUE_SCALE: f32 = -7.0;
pub const TEMP_HUE_OFFSET: f32 = 240.0;

/// Color used for zero precipitation and missing observations
pub const WHITE_HEX: &str = "#FFFFFF";

/// Buffered reader capacity
pub const DEFAULT_BUFFER_SIZE: usize = 8192 * 16; // 128KB
