/*
[INPUT]:  API schema status/type strings
[OUTPUT]: Closed Rust enums with an Unknown fallback for new server values
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new status values are documented
*/

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Declares a string-backed enum.
///
/// Decoding is case-insensitive and never fails on unrecognised values, which
/// land in `Unknown(String)`; encoding uses the canonical wire spelling.
macro_rules! string_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $($variant:ident => $wire:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant,)+
            Unknown(String),
        }

        impl $name {
            pub fn as_str(&self) -> &str {
                match self {
                    $(Self::$variant => $wire,)+
                    Self::Unknown(value) => value.as_str(),
                }
            }

            pub fn is_unknown(&self) -> bool {
                matches!(self, Self::Unknown(_))
            }
        }

        impl FromStr for $name {
            type Err = std::convert::Infallible;

            fn from_str(value: &str) -> Result<Self, Self::Err> {
                $(
                    if value.eq_ignore_ascii_case($wire) {
                        return Ok(Self::$variant);
                    }
                )+
                Ok(Self::Unknown(value.to_string()))
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let raw = String::deserialize(deserializer)?;
                let Ok(value) = raw.parse::<Self>();
                Ok(value)
            }
        }
    };
}

string_enum! {
    /// Status shared by transfers, deposits, payouts and conversions
    pub enum TransferStatus {
        Pending => "PENDING",
        Processing => "PROCESSING",
        Completed => "COMPLETED",
        Failed => "FAILED",
        Cancelled => "CANCELLED",
    }
}

string_enum! {
    pub enum DepositStatus {
        Pending => "PENDING",
        Completed => "COMPLETED",
        Failed => "FAILED",
        Rejected => "REJECTED",
    }
}

string_enum! {
    pub enum PayoutStatus {
        Pending => "PENDING",
        Processing => "PROCESSING",
        Completed => "COMPLETED",
        Failed => "FAILED",
        Cancelled => "CANCELLED",
        Returned => "RETURNED",
    }
}

string_enum! {
    pub enum ConversionStatus {
        Pending => "PENDING",
        Completed => "COMPLETED",
        Failed => "FAILED",
    }
}

string_enum! {
    pub enum BalanceStatus {
        Active => "ACTIVE",
        Inactive => "INACTIVE",
        Frozen => "FROZEN",
    }
}

string_enum! {
    pub enum BalanceTransactionType {
        Payin => "PAYIN",
        Deposit => "DEPOSIT",
        Payout => "PAYOUT",
        Transfer => "TRANSFER",
        Conversion => "CONVERSION",
        Fee => "FEE",
    }
}

string_enum! {
    pub enum BalanceTransactionStatus {
        Pending => "PENDING",
        Completed => "COMPLETED",
        Failed => "FAILED",
    }
}

string_enum! {
    pub enum VirtualAccountStatus {
        Active => "ACTIVE",
        Pending => "PENDING",
        Inactive => "INACTIVE",
        Closed => "CLOSED",
    }
}

string_enum! {
    /// Legal form of a beneficiary or connected account
    pub enum EntityType {
        Individual => "INDIVIDUAL",
        Company => "COMPANY",
    }
}

string_enum! {
    pub enum BeneficiaryStatus {
        Active => "ACTIVE",
        Inactive => "INACTIVE",
        Pending => "PENDING",
    }
}

string_enum! {
    pub enum AccountStatus {
        Active => "ACTIVE",
        Pending => "PENDING",
        Restricted => "RESTRICTED",
        Disabled => "DISABLED",
    }
}

string_enum! {
    pub enum CardholderStatus {
        Pending => "PENDING",
        Success => "SUCCESS",
        Incomplete => "INCOMPLETE",
        Failed => "FAILED",
    }
}

string_enum! {
    pub enum CardStatus {
        Pending => "PENDING",
        Active => "ACTIVE",
        Frozen => "FROZEN",
        Blocked => "BLOCKED",
        Cancelled => "CANCELLED",
        Lost => "LOST",
        Stolen => "STOLEN",
        Failed => "FAILED",
    }
}

string_enum! {
    /// Status of a card recharge/withdraw/status-change order
    pub enum CardOrderStatus {
        Pending => "PENDING",
        Processing => "PROCESSING",
        Success => "SUCCESS",
        Failed => "FAILED",
    }
}

string_enum! {
    pub enum ProductStatus {
        Enabled => "ENABLED",
        Disabled => "DISABLED",
    }
}

string_enum! {
    /// Whether cards of a product draw on their own balance or a shared one
    pub enum CardMode {
        Single => "SINGLE",
        Share => "SHARE",
    }
}

string_enum! {
    pub enum IssuingTransactionStatus {
        Pending => "PENDING",
        Approved => "APPROVED",
        Declined => "DECLINED",
        Reversed => "REVERSED",
        Settled => "SETTLED",
    }
}
