#[macro_export]
macro_rules! mux {
    {$($method:tt $pattern:expr => $handler:expr),+ ; _ => $default:expr} => {{
        let mut __mux = $crate::mux!($($method $pattern => $handler),+);
        __mux.not_found($default);
        __mux
    }};

    {$($method:tt $pattern:expr => $handler:expr),+ $(,)?} => {{
        let mut __mux = $crate::Mux::new();
        $(__mux.route(stringify!($method), $pattern, $handler);)+
        __mux
    }};
}
