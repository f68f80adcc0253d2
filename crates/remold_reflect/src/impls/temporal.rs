use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::impls::NonGenericTypeInfoCell;
use crate::info::{DateInfo, DateTimeInfo, TimeInfo, TypeInfo, Typed};

impl Typed for NaiveDateTime {
    fn type_info() -> &'static TypeInfo {
        static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
        CELL.get_or_init(|| {
            TypeInfo::DateTime(DateTimeInfo::new::<NaiveDateTime>(|v| Box::new(v)))
        })
    }
}

impl Typed for NaiveDate {
    fn type_info() -> &'static TypeInfo {
        static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
        CELL.get_or_init(|| TypeInfo::Date(DateInfo::new::<NaiveDate>(|v| Box::new(v))))
    }
}

impl Typed for NaiveTime {
    fn type_info() -> &'static TypeInfo {
        static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
        CELL.get_or_init(|| TypeInfo::Time(TimeInfo::new::<NaiveTime>(|v| Box::new(v))))
    }
}
