//! Closed string vocabularies stored as `TEXT` columns.
//!
//! Each enum round-trips through its canonical database spelling for both
//! diesel and serde, so the JSON API and the tables always agree on the
//! wire form.

use diesel::deserialize::{self, FromSql};
use diesel::pg::{Pg, PgValue};
use diesel::serialize::{self, Output, ToSql};
use diesel::sql_types::Text;
use diesel::{AsExpression, FromSqlRow};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;

macro_rules! text_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $text:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash,
            Serialize, Deserialize, ToSchema,
            AsExpression, FromSqlRow,
        )]
        #[diesel(sql_type = Text)]
        pub enum $name {
            $(
                #[serde(rename = $text)]
                $variant,
            )+
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $text,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($text => Ok(Self::$variant),)+
                    other => Err(format!(
                        concat!("unrecognized ", stringify!($name), " value: {}"),
                        other
                    )),
                }
            }
        }

        impl ToSql<Text, Pg> for $name {
            fn to_sql<'b>(&'b self, out: &mut Output<'b, '_, Pg>) -> serialize::Result {
                <str as ToSql<Text, Pg>>::to_sql(self.as_str(), out)
            }
        }

        impl FromSql<Text, Pg> for $name {
            fn from_sql(bytes: PgValue<'_>) -> deserialize::Result<Self> {
                let s = std::str::from_utf8(bytes.as_bytes())?;
                s.parse::<$name>().map_err(Into::into)
            }
        }
    };
}

text_enum! {
    Role {
        Admin => "admin",
        Staff => "staff",
        Student => "student",
    }
}

text_enum! {
    /// Menu catalog grouping; distinct from [`MealType`], which describes the
    /// sitting an order is placed for.
    Category {
        Breakfast => "breakfast",
        Lunch => "lunch",
        Snacks => "snacks",
        Drinks => "drinks",
    }
}

text_enum! {
    MealType {
        Breakfast => "breakfast",
        Lunch => "lunch",
        Snacks => "snacks",
        Dinner => "dinner",
    }
}

text_enum! {
    OrderStatus {
        Pending => "pending",
        Preparing => "preparing",
        Ready => "ready",
        Completed => "completed",
        Cancelled => "cancelled",
    }
}

text_enum! {
    /// Tokens keep their historical uppercase spelling in the database.
    TokenStatus {
        Pending => "PENDING",
        Used => "USED",
        Expired => "EXPIRED",
    }
}

impl OrderStatus {
    /// Completed and cancelled orders accept no further transitions.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed | Self::Cancelled)
    }
}
