//! Macros for the runtime registry.

/// Generates `From` impls into [`AnyUnit`](crate::AnyUnit) and the per-domain dispatch used by the registry.
///
/// Each listed identifier must name a [`DomainKind`](crate::DomainKind) variant, an
/// [`AnyUnit`](crate::AnyUnit) variant and the unit enum of that domain.
macro_rules! impl_any_unit {
    ($($kind:ident),+ $(,)?) => {
        $(
            impl From<$kind> for AnyUnit {
                #[inline]
                fn from(unit: $kind) -> Self {
                    AnyUnit::$kind(unit)
                }
            }
        )+

        impl AnyUnit {
            /// Domain this unit belongs to.
            #[inline]
            pub fn domain(self) -> DomainKind {
                match self {
                    $(AnyUnit::$kind(_) => DomainKind::$kind,)+
                }
            }

            /// Canonical symbol of the wrapped unit.
            #[inline]
            pub fn symbol(self) -> &'static str {
                match self {
                    $(AnyUnit::$kind(unit) => <$kind as Domain>::symbol(unit),)+
                }
            }

            /// Position of the wrapped unit within its own domain.
            #[inline]
            pub fn index(self) -> u8 {
                match self {
                    $(AnyUnit::$kind(unit) => <$kind as Domain>::index(unit),)+
                }
            }
        }

        fn guess_in(domain: DomainKind, symbol: &str) -> Option<AnyUnit> {
            match domain {
                $(DomainKind::$kind => <$kind as Domain>::try_guess_unit(symbol).map(AnyUnit::$kind),)+
            }
        }

        fn convert_within(value: Scalar, from: AnyUnit, to: AnyUnit) -> Option<Scalar> {
            match (from, to) {
                $((AnyUnit::$kind(a), AnyUnit::$kind(b)) => Some(<$kind as Convert>::convert(value, a, b)),)+
                _ => None,
            }
        }

        fn units_of(domain: DomainKind) -> Vec<AnyUnit> {
            match domain {
                $(DomainKind::$kind => <$kind as Domain>::ALL.iter().copied().map(AnyUnit::$kind).collect(),)+
            }
        }
    };
}

pub(crate) use impl_any_unit;
