use crate::bytes::{ByteBuf, Bytes};
use crate::impls::NonGenericTypeInfoCell;
use crate::info::{BoolInfo, BytesInfo, FloatInfo, IntInfo, TextInfo, TypeInfo, Typed};

// -----------------------------------------------------------------------------
// Boolean

impl Typed for bool {
    fn type_info() -> &'static TypeInfo {
        static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
        CELL.get_or_init(|| TypeInfo::Bool(BoolInfo::new::<bool>(|v| Box::new(v))))
    }
}

// -----------------------------------------------------------------------------
// Integers

macro_rules! impl_typed_int {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Typed for $ty {
                fn type_info() -> &'static TypeInfo {
                    static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
                    CELL.get_or_init(|| {
                        TypeInfo::Int(IntInfo::new::<$ty>(|v| {
                            <$ty>::try_from(v)
                                .ok()
                                .map(|n| Box::new(n) as Box<dyn core::any::Any>)
                        }))
                    })
                }
            }
        )*
    };
}

impl_typed_int!(i8, i16, i32, i64, i128, u8, u16, u32, u64, u128, usize, isize);

// -----------------------------------------------------------------------------
// Floats

impl Typed for f32 {
    fn type_info() -> &'static TypeInfo {
        static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
        CELL.get_or_init(|| TypeInfo::Float(FloatInfo::new::<f32>(|v| Box::new(v as f32))))
    }
}

impl Typed for f64 {
    fn type_info() -> &'static TypeInfo {
        static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
        CELL.get_or_init(|| TypeInfo::Float(FloatInfo::new::<f64>(|v| Box::new(v))))
    }
}

// -----------------------------------------------------------------------------
// Text

impl Typed for String {
    fn type_info() -> &'static TypeInfo {
        static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
        CELL.get_or_init(|| TypeInfo::Text(TextInfo::new::<String>(|s| Box::new(s))))
    }
}

// -----------------------------------------------------------------------------
// Byte buffers

impl Typed for Bytes {
    fn type_info() -> &'static TypeInfo {
        static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
        CELL.get_or_init(|| TypeInfo::Bytes(BytesInfo::new::<Bytes>(|b| Box::new(Bytes::new(b)))))
    }
}

impl Typed for ByteBuf {
    fn type_info() -> &'static TypeInfo {
        static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
        CELL.get_or_init(|| {
            TypeInfo::Bytes(BytesInfo::new::<ByteBuf>(|b| Box::new(ByteBuf::new(b))))
        })
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use crate::info::{TypeKind, Typed};

    #[test]
    fn family_kinds() {
        assert_eq!(bool::type_info().kind(), TypeKind::Bool);
        assert_eq!(u8::type_info().kind(), TypeKind::Int);
        assert_eq!(f32::type_info().kind(), TypeKind::Float);
        assert_eq!(String::type_info().kind(), TypeKind::Text);
        assert_eq!(crate::Bytes::type_info().kind(), TypeKind::Bytes);
    }

    #[test]
    fn int_narrowing() {
        let info = match u8::type_info() {
            crate::info::TypeInfo::Int(info) => info,
            _ => unreachable!(),
        };
        assert!(info.make(255).is_some());
        assert!(info.make(256).is_none());
        assert!(info.make(-1).is_none());
    }
}
