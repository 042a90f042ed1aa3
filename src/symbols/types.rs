use std::fmt::Display;

/// The type of an expression or a symbol.
///
/// Equality is nominal for tuples and deliberately coarse for functions: any two function types
/// compare equal, since they only ever meet in misuse checks.
#[derive(Debug, Clone, Eq)]
pub enum Type {
    Logical,
    Integer,
    Void,
    String,
    /// A value of the named tuple type.
    TupleInstance(String),
    /// The tuple type itself, as named in a declaration.
    TupleDef(String),
    Function {
        return_type: Box<Type>,
        params: Vec<Type>,
    },
    /// A violation was already reported for this value.
    Error,
}

impl PartialEq for Type {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Type::TupleInstance(a), Type::TupleInstance(b)) => a == b,
            (Type::TupleDef(a), Type::TupleDef(b)) => a == b,
            (Type::Function { .. }, Type::Function { .. }) => true,
            (Type::Logical, Type::Logical)
            | (Type::Integer, Type::Integer)
            | (Type::Void, Type::Void)
            | (Type::String, Type::String)
            | (Type::Error, Type::Error) => true,
            _ => false,
        }
    }
}

impl Type {
    pub fn is_logical(&self) -> bool {
        matches!(self, Type::Logical)
    }

    pub fn is_integer(&self) -> bool {
        matches!(self, Type::Integer)
    }

    pub fn is_void(&self) -> bool {
        matches!(self, Type::Void)
    }

    pub fn is_string(&self) -> bool {
        matches!(self, Type::String)
    }

    pub fn is_tuple_instance(&self) -> bool {
        matches!(self, Type::TupleInstance(_))
    }

    pub fn is_tuple_def(&self) -> bool {
        matches!(self, Type::TupleDef(_))
    }

    pub fn is_function(&self) -> bool {
        matches!(self, Type::Function { .. })
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Type::Error)
    }
}

impl Display for Type {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Type::Logical => write!(f, "logical"),
            Type::Integer => write!(f, "integer"),
            Type::Void => write!(f, "void"),
            Type::String => write!(f, "string"),
            Type::TupleInstance(name) => write!(f, "{}", name),
            Type::TupleDef(name) => write!(f, "tuple {}", name),
            Type::Function {
                return_type,
                params,
            } => {
                let params = params
                    .iter()
                    .map(|param| param.to_string())
                    .collect::<Vec<String>>()
                    .join(",");
                write!(f, "{}->{}", params, return_type)
            }
            Type::Error => write!(f, "error"),
        }
    }
}
