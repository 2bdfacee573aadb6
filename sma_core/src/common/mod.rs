pub mod analysis_error;
pub mod enums;
pub mod func_util;
