use crate::schema::app::FieldType;

use std::fmt;

/// Database-level storage types a column can be declared with.
///
/// This is a closed set: a declared column type either parses into one of
/// these variants or the field is rejected. Each variant knows which
/// application-level [`FieldType`] it stores and whether it implies a length
/// rule.
///
/// # Parsing
///
/// [`Type::parse`] is case-insensitive and accepts a few synonyms:
///
/// ```text
/// STRING                 →  VARCHAR(255)
/// DATE, TIME, DATETIME   →  TIMESTAMP
/// INTEGER                →  INT
/// ```
///
/// `TIMESTAMP` columns hold Unix epoch milliseconds; the SQL serializer emits
/// them as `BIGINT UNSIGNED` so ordering and comparison stay numeric.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Type {
    /// A boolean value, stored as a one-byte integer
    Boolean,

    /// Fixed-length text with an optional declared length
    Char(Option<u64>),

    /// Variable-length text with an optional declared maximum length
    VarChar(Option<u64>),

    /// One of the `TEXT` family with an optional declared length
    Text(TextSize, Option<u64>),

    /// An integer of the given size
    Integer {
        size: IntegerSize,

        /// Display width, e.g. the `11` in `INT(11)`
        width: Option<u32>,

        unsigned: bool,
    },

    /// `DECIMAL` with optional precision and scale
    Decimal {
        precision: Option<u32>,
        scale: Option<u32>,
        unsigned: bool,
    },

    /// `NUMERIC` with optional precision and scale
    Numeric {
        precision: Option<u32>,
        scale: Option<u32>,
        unsigned: bool,
    },

    /// Single-precision float
    Float,

    /// Double-precision float
    Double,

    /// An instant in time
    Timestamp,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum TextSize {
    Tiny,
    Regular,
    Medium,
    Long,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum IntegerSize {
    Tiny,
    Small,
    Medium,
    Regular,
    Big,
}

impl Type {
    /// Parses a declared column type. Returns `None` for anything outside the
    /// supported set, such as `JSON` or `BLOB`.
    pub fn parse(src: &str) -> Option<Type> {
        let upper = src.trim().to_uppercase();

        let canonical = match upper.as_str() {
            "STRING" => "VARCHAR(255)",
            "DATE" | "TIME" | "DATETIME" => "TIMESTAMP",
            other => other,
        };

        let (rest, unsigned) = match canonical.strip_suffix("UNSIGNED") {
            Some(rest) => (rest.trim_end(), true),
            None => (canonical, false),
        };

        let (base, args) = match rest.split_once('(') {
            Some((base, args)) => (base.trim_end(), Some(args.strip_suffix(')')?)),
            None => (rest, None),
        };

        let args = match args {
            Some(args) => args
                .split(',')
                .map(|arg| arg.trim().parse::<u64>().ok())
                .collect::<Option<Vec<_>>>()?,
            None => vec![],
        };

        let ty = match (base, &args[..]) {
            ("BOOLEAN", []) => Type::Boolean,
            ("CHAR", []) => Type::Char(None),
            ("CHAR", [len]) => Type::Char(Some(*len)),
            ("VARCHAR", []) => Type::VarChar(None),
            ("VARCHAR", [len]) => Type::VarChar(Some(*len)),
            ("FLOAT", []) => Type::Float,
            ("DOUBLE", []) => Type::Double,
            ("TIMESTAMP", []) => Type::Timestamp,
            ("DECIMAL" | "NUMERIC", [..]) if args.len() <= 2 => {
                let precision = args.first().copied().map(u32::try_from).transpose().ok()?;
                let scale = args.get(1).copied().map(u32::try_from).transpose().ok()?;

                if base == "DECIMAL" {
                    Type::Decimal {
                        precision,
                        scale,
                        unsigned,
                    }
                } else {
                    Type::Numeric {
                        precision,
                        scale,
                        unsigned,
                    }
                }
            }
            (keyword, [] | [_]) => {
                let len = args.first().copied();

                if let Some(size) = TextSize::from_keyword(keyword) {
                    Type::Text(size, len)
                } else if let Some(size) = IntegerSize::from_keyword(keyword) {
                    Type::Integer {
                        size,
                        width: len.map(u32::try_from).transpose().ok()?,
                        unsigned,
                    }
                } else {
                    return None;
                }
            }
            _ => return None,
        };

        if unsigned
            && !matches!(
                ty,
                Type::Integer { .. } | Type::Decimal { .. } | Type::Numeric { .. }
            )
        {
            return None;
        }

        Some(ty)
    }

    /// The application-level type values of this column have.
    pub fn field_type(&self) -> FieldType {
        match self {
            Type::Boolean => FieldType::Boolean,
            Type::Char(_) | Type::VarChar(_) | Type::Text(..) => FieldType::String,
            Type::Integer { .. }
            | Type::Decimal { .. }
            | Type::Numeric { .. }
            | Type::Float
            | Type::Double
            | Type::Timestamp => FieldType::Number,
        }
    }

    /// The declared length of a sized text type.
    pub fn length(&self) -> Option<u64> {
        match *self {
            Type::Char(len) | Type::VarChar(len) | Type::Text(_, len) => len,
            _ => None,
        }
    }

    pub fn is_timestamp(&self) -> bool {
        matches!(self, Type::Timestamp)
    }
}

impl TextSize {
    fn from_keyword(keyword: &str) -> Option<Self> {
        Some(match keyword {
            "TINYTEXT" => TextSize::Tiny,
            "TEXT" => TextSize::Regular,
            "MEDIUMTEXT" => TextSize::Medium,
            "LONGTEXT" => TextSize::Long,
            _ => return None,
        })
    }

    pub fn keyword(self) -> &'static str {
        match self {
            TextSize::Tiny => "TINYTEXT",
            TextSize::Regular => "TEXT",
            TextSize::Medium => "MEDIUMTEXT",
            TextSize::Long => "LONGTEXT",
        }
    }
}

impl IntegerSize {
    fn from_keyword(keyword: &str) -> Option<Self> {
        Some(match keyword {
            "TINYINT" => IntegerSize::Tiny,
            "SMALLINT" => IntegerSize::Small,
            "MEDIUMINT" => IntegerSize::Medium,
            "INT" | "INTEGER" => IntegerSize::Regular,
            "BIGINT" => IntegerSize::Big,
            _ => return None,
        })
    }

    pub fn keyword(self) -> &'static str {
        match self {
            IntegerSize::Tiny => "TINYINT",
            IntegerSize::Small => "SMALLINT",
            IntegerSize::Medium => "MEDIUMINT",
            IntegerSize::Regular => "INT",
            IntegerSize::Big => "BIGINT",
        }
    }
}

/// Canonical spelling of the declared type, e.g. `VARCHAR(255)` or
/// `DECIMAL(10,2) UNSIGNED`. `BOOLEAN` and `TIMESTAMP` keep their declared names;
/// their storage spelling is the serializer's concern.
impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Type::Boolean => f.write_str("BOOLEAN"),
            Type::Char(len) => sized(f, "CHAR", *len),
            Type::VarChar(len) => sized(f, "VARCHAR", *len),
            Type::Text(size, len) => sized(f, size.keyword(), *len),
            Type::Integer {
                size,
                width,
                unsigned,
            } => {
                sized(f, size.keyword(), width.map(u64::from))?;
                if *unsigned {
                    f.write_str(" UNSIGNED")?;
                }
                Ok(())
            }
            Type::Decimal {
                precision,
                scale,
                unsigned,
            } => precise(f, "DECIMAL", *precision, *scale, *unsigned),
            Type::Numeric {
                precision,
                scale,
                unsigned,
            } => precise(f, "NUMERIC", *precision, *scale, *unsigned),
            Type::Float => f.write_str("FLOAT"),
            Type::Double => f.write_str("DOUBLE"),
            Type::Timestamp => f.write_str("TIMESTAMP"),
        }
    }
}

fn sized(f: &mut fmt::Formatter<'_>, keyword: &str, len: Option<u64>) -> fmt::Result {
    match len {
        Some(len) => write!(f, "{keyword}({len})"),
        None => f.write_str(keyword),
    }
}

fn precise(
    f: &mut fmt::Formatter<'_>,
    keyword: &str,
    precision: Option<u32>,
    scale: Option<u32>,
    unsigned: bool,
) -> fmt::Result {
    match (precision, scale) {
        (Some(precision), Some(scale)) => write!(f, "{keyword}({precision},{scale})")?,
        (Some(precision), None) => write!(f, "{keyword}({precision})")?,
        _ => f.write_str(keyword)?,
    }
    if unsigned {
        f.write_str(" UNSIGNED")?;
    }
    Ok(())
}
