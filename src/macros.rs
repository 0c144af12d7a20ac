// src/macros.rs

/// `s!()` is an empty `String`; `s!(x)` is `String::from(x)`.
#[macro_export]
macro_rules! s {
    () => {
        ::std::string::String::new()
    };
    ($expr:expr) => {
        ::std::string::String::from($expr)
    };
}

/// Concatenate two or more `&str` pieces into a new `String`.
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
    fn join_concatenates_in_order() {
        let tier = "3";
        assert_eq!(join!("Tier ", tier, ":"), "Tier 3:");
        assert_eq!(s!(), "");
    }
}
