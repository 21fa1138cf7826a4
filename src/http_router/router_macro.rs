#[macro_export]
macro_rules! http_router {
    {$($method:tt $pattern:expr => $data:expr),+ $(,)?} => {{
        let mut __router = $crate::HttpRouter::new();
        $(__router.insert($crate::Method::$method, $pattern, $data);)+
        __router
    }};
}
