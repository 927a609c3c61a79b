// src/macros.rs

/// `String` shorthand: `s!()` is empty, `s!(x)` is `String::from(x)`.
#[macro_export]
macro_rules! s {
    () => {
        ::std::string::String::new()
    };
    ($text:expr) => {
        ::std::string::String::from($text)
    };
}

/// Concatenate string slices into a new `String`, first argument owned.
#[macro_export]
macro_rules! join {
    ($head:expr $(, $tail:expr)+ $(,)?) => {{
        let mut buf = ::std::string::String::from($head);
        $( buf.push_str($tail); )+
        buf
    }};
}

/// Push owned copies of one or more lines onto a `Vec<String>`.
#[macro_export]
macro_rules! push_lines {
    ($out:expr $(, $line:expr)+ $(,)?) => {{
        $( $out.push(::std::string::String::from($line)); )+
    }};
}
