/// Declares a closed OCPP enumeration with its schema wire names.
///
/// Generates serde renames, `as_str`, `Display` and a `FromStr` that
/// rejects anything outside the set.
macro_rules! ocpp_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident = $wire:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(serde::Serialize, serde::Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
        pub enum $name {
            $(
                $(#[$vmeta])*
                #[serde(rename = $wire)]
                $variant,
            )+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $wire,)+
                }
            }
        }

        impl core::fmt::Display for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl core::str::FromStr for $name {
            type Err = $crate::contract::ParseEnumError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($wire => Ok($name::$variant),)+
                    _ => Err($crate::contract::ParseEnumError {
                        kind: stringify!($name),
                        value: alloc::string::ToString::to_string(s),
                    }),
                }
            }
        }
    };
}

/// Declares a payload or value object from its schema field list.
///
/// Each field names its OCPP property and the predicates its value must
/// satisfy. Mandatory fields are constructor arguments and are checked
/// there; optional fields get `set_*`/`with_*` mutators that check before
/// storing. Every object also carries an optional `customData`.
///
/// A trailing `verify path;` names a check over the whole object, for
/// rules that tie fields together. It runs after the field predicates, in
/// `new` and in `check()`.
///
/// ```ignore
/// ocpp_object! {
///     pub struct Variable {
///         required {
///             name: String = "name" [NonEmpty, MaxLen(50)],
///         }
///         optional {
///             instance: String = "instance" [MaxLen(50)],
///         }
///     }
/// }
/// ```
macro_rules! ocpp_object {
    (@define
        $(#[$meta:meta])*
        $name:ident
        required {
            $( $(#[$rmeta:meta])* $req:ident : $rty:ty = $rwire:literal [$($rrule:expr),*] ),*
        }
        optional {
            $( $(#[$ometa:meta])* $opt:ident : $oty:ty = $owire:literal [$($orule:expr),*] ),*
        }
        verify { $($verify:path)? }
    ) => {
        $(#[$meta])*
        #[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq, Eq, Hash)]
        pub struct $name {
            #[serde(rename = "customData", default, skip_serializing_if = "Option::is_none")]
            custom_data: Option<$crate::contract::CustomData>,
            $(
                $(#[$rmeta])*
                #[serde(rename = $rwire)]
                $req: $rty,
            )*
            $(
                $(#[$ometa])*
                #[serde(rename = $owire, default, skip_serializing_if = "Option::is_none")]
                $opt: Option<$oty>,
            )*
        }

        paste::paste! {
            impl $name {
                $(
                    $(#[$rmeta])*
                    pub fn $req(&self) -> &$rty {
                        &self.$req
                    }

                    #[allow(unused_variables)]
                    fn [<check_ $req>](value: &$rty) -> Result<(), $crate::contract::ConstraintViolation> {
                        $( $crate::contract::Rule::<$rty>::check(&$rrule, $rwire, value)?; )*
                        Ok(())
                    }
                )*

                $(
                    $(#[$ometa])*
                    pub fn $opt(&self) -> Option<&$oty> {
                        self.$opt.as_ref()
                    }

                    pub fn [<set_ $opt>](
                        &mut self,
                        value: Option<$oty>,
                    ) -> Result<(), $crate::contract::ConstraintViolation> {
                        if let Some(value) = &value {
                            Self::[<check_ $opt>](value)
                                .map_err(|e| $crate::contract::rejected(stringify!($name), e))?;
                        }
                        self.$opt = value;
                        Ok(())
                    }

                    pub fn [<with_ $opt>](
                        mut self,
                        value: $oty,
                    ) -> Result<Self, $crate::contract::ConstraintViolation> {
                        self.[<set_ $opt>](Some(value))?;
                        Ok(self)
                    }

                    #[allow(unused_variables)]
                    fn [<check_ $opt>](value: &$oty) -> Result<(), $crate::contract::ConstraintViolation> {
                        $( $crate::contract::Rule::<$oty>::check(&$orule, $owire, value)?; )*
                        Ok(())
                    }
                )*

                pub fn custom_data(&self) -> Option<&$crate::contract::CustomData> {
                    self.custom_data.as_ref()
                }

                /// Attaching is unchecked; an invalid vendor id fails `check()`.
                pub fn set_custom_data(&mut self, value: Option<$crate::contract::CustomData>) {
                    self.custom_data = value;
                }

                pub fn with_custom_data(mut self, value: $crate::contract::CustomData) -> Self {
                    self.custom_data = Some(value);
                    self
                }
            }

            impl $crate::contract::Validate for $name {
                fn check(&self) -> Result<(), $crate::contract::ConstraintViolation> {
                    if let Some(custom_data) = &self.custom_data {
                        $crate::contract::Rule::<$crate::contract::CustomData>::check(
                            &$crate::contract::Nested,
                            "customData",
                            custom_data,
                        )?;
                    }
                    $( Self::[<check_ $req>](&self.$req)?; )*
                    $(
                        if let Some(value) = &self.$opt {
                            Self::[<check_ $opt>](value)?;
                        }
                    )*
                    $( $verify(self)?; )?
                    Ok(())
                }
            }
        }

        impl core::fmt::Display for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                write!(f, "{}{{customData={:?}", stringify!($name), self.custom_data)?;
                $( write!(f, ", {}={:?}", $rwire, self.$req)?; )*
                $( write!(f, ", {}={:?}", $owire, self.$opt)?; )*
                write!(f, ", isValid={}}}", $crate::contract::Validate::validate(self))
            }
        }
    };

    (
        $(#[$meta:meta])*
        pub struct $name:ident {
            required {}
            optional {
                $( $(#[$ometa:meta])* $opt:ident : $oty:ty = $owire:literal [$($orule:expr),*] ),* $(,)?
            }
            $(verify $verify:path;)?
        }
    ) => {
        ocpp_object!(@define
            $(#[$meta])*
            $name
            required {}
            optional {
                $( $(#[$ometa])* $opt : $oty = $owire [$($orule),*] ),*
            }
            verify { $($verify)? }
        );

        impl $name {
            pub fn new() -> Self {
                Self {
                    custom_data: None,
                    $($opt: None,)*
                }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }
    };

    (
        $(#[$meta:meta])*
        pub struct $name:ident {
            required {
                $( $(#[$rmeta:meta])* $req:ident : $rty:ty = $rwire:literal [$($rrule:expr),*] ),* $(,)?
            }
            optional {
                $( $(#[$ometa:meta])* $opt:ident : $oty:ty = $owire:literal [$($orule:expr),*] ),* $(,)?
            }
            $(verify $verify:path;)?
        }
    ) => {
        ocpp_object!(@define
            $(#[$meta])*
            $name
            required {
                $( $(#[$rmeta])* $req : $rty = $rwire [$($rrule),*] ),*
            }
            optional {
                $( $(#[$ometa])* $opt : $oty = $owire [$($orule),*] ),*
            }
            verify { $($verify)? }
        );

        paste::paste! {
            impl $name {
                pub fn new($($req: $rty),*) -> Result<Self, $crate::contract::ConstraintViolation> {
                    $(
                        Self::[<check_ $req>](&$req)
                            .map_err(|e| $crate::contract::rejected(stringify!($name), e))?;
                    )*
                    let value = Self {
                        custom_data: None,
                        $($req,)*
                        $($opt: None,)*
                    };
                    $(
                        $verify(&value)
                            .map_err(|e| $crate::contract::rejected(stringify!($name), e))?;
                    )?
                    Ok(value)
                }
            }
        }
    };
}
