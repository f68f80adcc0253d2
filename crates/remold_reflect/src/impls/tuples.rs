use core::any::Any;

use crate::error::DeserializeError;
use crate::impls::GenericTypeInfoCell;
use crate::info::{TupleInfo, TypeInfo, Typed, UnnamedField};
use crate::ops::ElementBag;

// Plain tuples are the unnamed fixed-tuple family; tuple structs (the
// named flavor) come from the derive instead.
macro_rules! impl_typed_tuple {
    ($(($($T:ident : $idx:tt),+)),+ $(,)?) => {
        $(
            impl<$($T: Typed),+> Typed for ($($T,)+) {
                fn type_info() -> &'static TypeInfo {
                    fn construct<$($T: Typed),+>(
                        elements: &mut ElementBag,
                    ) -> Result<Box<dyn Any>, DeserializeError> {
                        Ok(Box::new(($(elements.take_at::<$T>($idx)?,)+)))
                    }

                    static CELL: GenericTypeInfoCell = GenericTypeInfoCell::new();
                    CELL.get_or_insert::<Self>(|| {
                        TypeInfo::Tuple(TupleInfo::new::<Self>(
                            &[$(UnnamedField::new::<$T>($idx)),+],
                            construct::<$($T),+>,
                        ))
                    })
                }
            }
        )+
    };
}

impl_typed_tuple! {
    (A: 0),
    (A: 0, B: 1),
    (A: 0, B: 1, C: 2),
    (A: 0, B: 1, C: 2, D: 3),
    (A: 0, B: 1, C: 2, D: 3, E: 4),
    (A: 0, B: 1, C: 2, D: 3, E: 4, F: 5),
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use crate::info::{TypeKind, Typed};

    #[test]
    fn tuple_infos() {
        let info = <(i32, String) as Typed>::type_info();
        assert_eq!(info.kind(), TypeKind::Tuple);

        let tuple = info.as_tuple().unwrap();
        assert_eq!(tuple.field_len(), 2);
        assert!(!tuple.is_named());
        assert!(tuple.field_at(0).unwrap().type_is::<i32>());
        assert!(tuple.field_at(1).unwrap().type_is::<String>());
    }
}
