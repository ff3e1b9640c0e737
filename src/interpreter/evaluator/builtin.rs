/// Input/output builtins: `mostrar`, `leer`, `leer_numero`.
pub mod io;
/// Math builtins: `abs`, `redondear`, `piso`, `techo`, `potencia`, `raiz`.
pub mod math;
/// Text builtins: conversions plus the string manipulation functions.
pub mod text;
/// Clock builtins: `ahora` and `dormir`.
pub mod time;
/// System builtins: `args`, `salir`, `cargar`.
pub mod system;
/// Collection builtins: `longitud`, `agregar`, `eliminar`, `rango`.
pub mod collection;

use crate::{error::RuntimeError, interpreter::value::core::Value};

/// Result type for builtin functions.
pub type BuiltinResult = Result<Value, RuntimeError>;

/// Type alias for builtin function handlers.
///
/// A builtin receives the already-evaluated argument values and returns its
/// result directly; sentinels never enter or leave a builtin.
pub type BuiltinFn = fn(&[Value]) -> BuiltinResult;

/// Specifies the allowed number of arguments for a builtin.
#[derive(Debug, Clone, Copy)]
pub enum Arity {
    /// The builtin takes exactly this many arguments.
    Exact(usize),
    /// The builtin accepts any arity listed in the slice.
    OneOf(&'static [usize]),
    /// The builtin takes whatever it is given.
    Any,
}

impl Arity {
    /// Tests whether the given argument count satisfies this constraint.
    pub(crate) fn accepts(self, count: usize) -> bool {
        match self {
            Self::Exact(expected) => count == expected,
            Self::OneOf(options) => options.contains(&count),
            Self::Any => true,
        }
    }

    /// Renders the accepted counts for the argument-count error message,
    /// e.g. `1` or `0 o 1`.
    pub(crate) fn expected(self) -> String {
        match self {
            Self::Exact(expected) => expected.to_string(),
            Self::OneOf(options) => options.iter()
                                           .map(ToString::to_string)
                                           .collect::<Vec<_>>()
                                           .join(" o "),
            Self::Any => String::new(),
        }
    }
}

/// Defines builtin functions by generating the lookup table.
///
/// Each entry provides a name, an arity specification and a function
/// pointer. The macro produces `BuiltinDef` metadata and the static
/// `BUILTIN_TABLE` the evaluator resolves otherwise-unbound names against.
macro_rules! builtin_functions {
    (
        $(
            $name:literal => {
                arity: $arity:expr,
                func: $func:expr $(,)?
            }
        ),* $(,)?
    ) => {
        /// One entry of the builtin table.
        #[derive(Debug)]
        pub struct BuiltinDef {
            /// The name scripts call the builtin by.
            pub name:  &'static str,
            /// The accepted argument counts.
            pub arity: Arity,
            /// The implementation.
            pub func:  BuiltinFn,
        }
        static BUILTIN_TABLE: &[BuiltinDef] = &[
            $(
                BuiltinDef { name: $name, arity: $arity, func: $func },
            )*
        ];
    };
}

builtin_functions! {
    // E/S
    "mostrar"     => { arity: Arity::Any,          func: io::mostrar },
    "leer"        => { arity: Arity::Any,          func: io::leer },
    "leer_numero" => { arity: Arity::Any,          func: io::leer_numero },
    // Matemáticas
    "abs"         => { arity: Arity::Exact(1),     func: math::abs },
    "redondear"   => { arity: Arity::Exact(1),     func: math::redondear },
    "piso"        => { arity: Arity::Exact(1),     func: math::piso },
    "techo"       => { arity: Arity::Exact(1),     func: math::techo },
    "potencia"    => { arity: Arity::Exact(2),     func: math::potencia },
    "raiz"        => { arity: Arity::OneOf(&[1, 2]), func: math::raiz },
    // Texto
    "texto"       => { arity: Arity::Exact(1),     func: text::texto },
    "num"         => { arity: Arity::Exact(1),     func: text::num },
    "mayusculas"  => { arity: Arity::Exact(1),     func: text::mayusculas },
    "minusculas"  => { arity: Arity::Exact(1),     func: text::minusculas },
    "recortar"    => { arity: Arity::Exact(1),     func: text::recortar },
    "contiene"    => { arity: Arity::Exact(2),     func: text::contiene },
    "reemplazar"  => { arity: Arity::Exact(3),     func: text::reemplazar },
    "dividir"     => { arity: Arity::Exact(2),     func: text::dividir },
    // Tiempo
    "ahora"       => { arity: Arity::Exact(0),     func: time::ahora },
    "dormir"      => { arity: Arity::Exact(1),     func: time::dormir },
    // Sistema
    "args"        => { arity: Arity::Exact(0),     func: system::args },
    "salir"       => { arity: Arity::OneOf(&[0, 1]), func: system::salir },
    "cargar"      => { arity: Arity::Exact(1),     func: system::cargar },
    // Colecciones
    "longitud"    => { arity: Arity::Exact(1),     func: collection::longitud },
    "agregar"     => { arity: Arity::Exact(2),     func: collection::agregar },
    "eliminar"    => { arity: Arity::Exact(2),     func: collection::eliminar },
    "rango"       => { arity: Arity::Exact(2),     func: collection::rango },
}

/// Finds a builtin by name.
#[must_use]
pub fn lookup(name: &str) -> Option<&'static BuiltinDef> {
    BUILTIN_TABLE.iter().find(|builtin| builtin.name == name)
}
