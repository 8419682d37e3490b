pub mod define;

use std::error::Error;

#[derive(Debug)]
pub(super) struct InternalChain(pub(crate) Box<dyn Error>,pub(crate) Option<Box<InternalChain>>);

macro_rules! impl_error {
    ($category:ident ,$name : ident, $message:expr, $descr : expr) => {
        #[derive(Debug)]
        pub struct $name(&'static str /* message(description) */,String /* sub message*/, Option<Box<InternalChain>> /* cause list*/);

        impl Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "cause {} : {}", self.0, self.1)?;

                let mut ptr = &self.2;
                let mut i = 0;
                while let Some(d) = ptr {
                    write!(f, "\n    {} at {}", i, d.0)?;
                    ptr = &d.1;
                    i += 1;
                }

                std::fmt::Result::Ok(())
            }
        }

        impl Error for $name  {
            fn source(&self) -> Option<&(dyn Error + 'static)> {
                self.2.as_ref().map(|c| c.0.as_ref())
            }
        }

        impl $name {
            pub const CATEGORY : &'static str = stringify!($category);
            pub const HINT : &'static str = $descr;

            pub fn new(sub_msg : String) -> Box<dyn Error> {
                let ret = $name($message, sub_msg, None);
                Box::new(ret)
            }

            pub fn chain(sub_msg : String, right : Box<dyn Error>) -> Box<dyn Error> {
                let ret = $name($message, sub_msg, Some(
                    Box::new(InternalChain(right, None))
                ));

                Box::new(ret)
            }

            pub fn message(&self) -> &'static str {
                self.0
            }

            pub fn sub_message(&self) -> &'_ str {
                self.1.as_str()
            }
        }

    };
}

macro_rules! impl_err_mod {
    ($name:ident, [$((
        $err_name:ident, $message:expr, $descr:expr)),*
    ]) => {
        pub mod $name {
            use std::error::Error;
            use std::fmt::Display;

            use crate::err::impl_error;
            use crate::err::InternalChain;

            $(impl_error!($name, $err_name, $message, $descr);)*
        }
    }
}

pub(crate) use impl_error;
pub(crate) use impl_err_mod;

#[macro_export]
macro_rules! func {
    () => {
        {
            fn f() {}
            fn type_name_of<T>(_: T) -> &'static str {
                std::any::type_name::<T>()
            }
            let name = type_name_of(f);
            &name[..name.len() - 3]
        }
    };
}
pub use crate::func;

#[macro_export]
macro_rules! make_err_msg {
    ($($arg:tt)+) => {{
        format!("{} [{}:{}] : {}", $crate::func!(), file!(), line!(), format!($($arg)+))
    }};
}
pub use crate::make_err_msg;

/// Returns true when `err` (or any error in its source chain) is a `E`.
pub fn is_kind<E : Error + 'static>(err : &'_ (dyn Error + 'static)) -> bool {
    let mut cur = Some(err);
    while let Some(e) = cur {
        if e.is::<E>() {
            return true;
        }
        cur = e.source();
    }
    false
}
