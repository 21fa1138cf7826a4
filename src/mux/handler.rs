/// Request handler, also used for the lifecycle hooks.
pub trait Handler<C> {
    fn call(&self, ex: &mut C);
}

pub type BoxHandler<C> = Box<dyn Handler<C> + Send + Sync>;

impl<C> Handler<C> for BoxHandler<C> {
    fn call(&self, ex: &mut C) {
        Handler::call(&**self, ex)
    }
}

impl<C, F> Handler<C> for F
where
    F: Fn(&mut C),
{
    fn call(&self, ex: &mut C) {
        (self)(ex)
    }
}
