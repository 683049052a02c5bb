// Copyright 2024-2025 Irreducible Inc.

/// Capture up to 8 expressions together with their source text.
///
/// Returns a [`Dump`](crate::Dump) that renders as
/// `{expr1 = value1, expr2 = value2, ...}` each time it is formatted.
///
/// ```
/// use field_dump::dump;
///
/// let foo = 42;
/// let bar = vec![1, 2, 3];
/// assert_eq!(dump!(foo, bar.len()).to_string(), "{foo = 42, bar.len() = 3}");
/// ```
///
/// A bare identifier or a field path on one (`req.name`, `pair.0`) is
/// borrowed and read again at every render. Any other expression is evaluated
/// once, here, and its value is moved into the record; later renders print that
/// same value.
///
/// ```
/// use field_dump::dump;
///
/// struct Request {
///     path: String,
/// }
///
/// fn describe(req: &Request) -> String {
///     dump!(req.path).to_string()
/// }
/// # std::env::remove_var("DUMP_FIELD_SEP");
/// # std::env::remove_var("DUMP_KV_SEP");
/// # std::env::remove_var("DUMP_BRACES");
/// assert_eq!(describe(&Request { path: "/".into() }), "{req.path = /}");
/// ```
///
/// The layout shown here is the default. The `DUMP_FIELD_SEP`, `DUMP_KV_SEP`
/// and `DUMP_BRACES` environment variables override it for the whole process
/// (see [`RenderConfig`](crate::RenderConfig)); use
/// `.with_config(RenderConfig::standard())` for output that ignores them.
///
/// Labels can be replaced with `rename`, separators with `sep`/`seps`:
///
/// ```
/// use field_dump::dump;
///
/// let (a, b) = (1, 2);
/// assert_eq!(dump!(a, b).rename(["x", "y"]).to_string(), "{x = 1, y = 2}");
/// assert_eq!(dump!(a, b).seps("; ", ":").to_string(), "{a:1; b:2}");
/// ```
///
/// # Bindings
///
/// `dump!(bind(name, ...); expr, ...)` borrows the listed names, moves or
/// copies every other name the expressions use into the record, and evaluates
/// all expressions again at every render. This is the way to dump places that
/// can't be moved out of, like fields of a destructured reference:
///
/// ```
/// use field_dump::dump;
///
/// let pairs = vec![(3, Box::new(String::from("hello")))];
/// let foo = "bar";
/// for (i, s) in &pairs {
///     assert_eq!(
///         dump!(bind(i, s); i, *s, foo).to_string(),
///         "{i = 3, *s = hello, foo = bar}"
///     );
/// }
/// ```
///
/// # Limitations
///
/// Every argument must be one complete Rust expression. A macro that expands to
/// several comma-separated values is a single argument, not several.
///
/// At most 8 expressions are accepted:
///
/// ```compile_fail
/// use field_dump::dump;
///
/// let _ = dump!(1, 2, 3, 4, 5, 6, 7, 8, 9);
/// ```
///
/// Values borrowing from a temporary are rejected, as they would outlive it:
///
/// ```compile_fail
/// use field_dump::dump;
///
/// let d = dump!(String::from("hello").as_str());
/// println!("{d}");
/// ```
#[macro_export]
macro_rules! dump {
    (bind ( $($bound:ident),* $(,)? ) ; $($e:expr),* $(,)?) => {{
        $crate::__dump_check_arity!($($e)*);
        #[allow(unused_imports)]
        use $crate::__private::{DebugKind as _, DisplayKind as _, OpaqueKind as _};

        $(let $bound = &$bound;)*
        $crate::Dump::deferred(
            [$(::core::stringify!($e)),*],
            move |fields: &mut $crate::FieldWriter<'_>| -> ::core::fmt::Result {
                $(
                    let value = &$e;
                    fields.field(&(&&&$crate::__private::Probe(value)).dump_kind().view(value))?;
                )*
                ::core::result::Result::Ok(())
            },
        )
    }};
    ($($args:tt)*) => {
        $crate::__dump_capture!(@munch [] $($args)*)
    };
}

/// Splits the arguments of `dump!` one at a time, deciding the binding of each.
#[doc(hidden)]
#[macro_export]
macro_rules! __dump_capture {
    (@munch [$(($label:expr, $slot:expr))*]) => {{
        $crate::__dump_check_arity!($($label)*);

        $crate::Dump::from_slots([$($label),*], [$($slot),*])
    }};
    (@munch [$($done:tt)*] $name:ident , $($rest:tt)*) => {
        $crate::__dump_capture!(@munch
            [$($done)* (::core::stringify!($name), $crate::__dump_capture!(@borrow $name))]
            $($rest)*
        )
    };
    (@munch [$($done:tt)*] $name:ident) => {
        $crate::__dump_capture!(@munch
            [$($done)* (::core::stringify!($name), $crate::__dump_capture!(@borrow $name))]
        )
    };
    (@munch [$($done:tt)*] $root:ident $(. $field:tt)+ , $($rest:tt)*) => {
        $crate::__dump_capture!(@munch
            [$($done)* (
                $crate::__dump_capture!(@label $root $(. $field)+),
                $crate::__dump_capture!(@borrow $root $(. $field)+)
            )]
            $($rest)*
        )
    };
    (@munch [$($done:tt)*] $root:ident $(. $field:tt)+) => {
        $crate::__dump_capture!(@munch
            [$($done)* (
                $crate::__dump_capture!(@label $root $(. $field)+),
                $crate::__dump_capture!(@borrow $root $(. $field)+)
            )]
        )
    };
    (@munch [$($done:tt)*] $e:expr , $($rest:tt)*) => {
        $crate::__dump_capture!(@munch
            [$($done)* (::core::stringify!($e), $crate::__dump_capture!(@own $e))]
            $($rest)*
        )
    };
    (@munch [$($done:tt)*] $e:expr) => {
        $crate::__dump_capture!(@munch
            [$($done)* (::core::stringify!($e), $crate::__dump_capture!(@own $e))]
        )
    };
    (@label $e:expr) => {
        ::core::stringify!($e)
    };
    (@borrow $($place:tt)+) => {{
        #[allow(unused_imports)]
        use $crate::__private::{DebugKind as _, DisplayKind as _, OpaqueKind as _};

        let kind = (&&&$crate::__private::Probe(&$($place)+)).dump_kind();
        kind.borrowed(&$($place)+)
    }};
    (@own $e:expr) => {{
        #[allow(unused_imports)]
        use $crate::__private::{DebugKind as _, DisplayKind as _, OpaqueKind as _};

        let value = $e;
        let kind = (&&&$crate::__private::Probe(&value)).dump_kind();
        kind.owned(value)
    }};
}

#[doc(hidden)]
#[macro_export]
macro_rules! __dump_check_arity {
    ($a:tt $b:tt $c:tt $d:tt $e:tt $f:tt $g:tt $h:tt $i:tt $($rest:tt)*) => {
        ::core::compile_error!("dump! accepts at most 8 expressions")
    };
    ($($args:tt)*) => {};
}
