use remold_ndarray::NdArray;

use crate::impls::NonGenericTypeInfoCell;
use crate::info::{NdArrayInfo, TypeInfo, Typed};

impl Typed for NdArray {
    fn type_info() -> &'static TypeInfo {
        static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
        CELL.get_or_init(|| TypeInfo::NdArray(NdArrayInfo::new::<NdArray>()))
    }
}
