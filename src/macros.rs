// src/macros.rs

/// Owned `String` from anything `String: From` accepts; `s!()` is empty.
#[macro_export]
macro_rules! s {
    () => {
        ::std::string::String::new()
    };
    ($expr:expr) => {
        ::std::string::String::from($expr)
    };
}

/// Glue two or more `&str`s into one owned `String`, e.g. `join!(city, ", ", country)`.
#[macro_export]
macro_rules! join {
    ($first:expr $(, $rest:expr)+ $(,)?) => {{
        let mut out = ::std::string::String::from($first);
        $( out.push_str($rest); )+
        out
    }};
}

#[cfg(test)]
mod tests {
    #[test]
    fn shorthands() {
        assert_eq!(s!(), "");
        assert_eq!(s!("Lima"), "Lima");
        assert_eq!(join!("Lima", ", ", "Peru"), "Lima, Peru");
    }
}
