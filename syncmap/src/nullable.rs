//! Detection of the "no value" state of a key or value type.
use std::rc::Rc;
use std::sync::Arc;

/// A type that may carry a null-sentinel.
///
/// Stores reject null keys and values with [`Error::InvalidArgument`](crate::Error::InvalidArgument).
/// Types without a null state return `false`, which is what the provided method does, so
/// implementing this for your own key type is usually a one-liner:
///
/// ```
/// use syncmap::Nullable;
///
/// #[derive(Clone, PartialEq, Eq, Hash)]
/// struct UserId(u64);
///
/// impl Nullable for UserId {}
/// ```
pub trait Nullable {
    fn is_null(&self) -> bool {
        false
    }
}

macro_rules! never_null {
    ($($ty:ty),* $(,)?) => {
        $(impl Nullable for $ty {})*
    };
}

never_null!(
    (),
    bool,
    char,
    i8,
    i16,
    i32,
    i64,
    i128,
    isize,
    u8,
    u16,
    u32,
    u64,
    u128,
    usize,
    f32,
    f64,
    str,
    String,
);

impl<T> Nullable for [T] {}

impl<T> Nullable for Vec<T> {}

impl<T> Nullable for Option<T> {
    fn is_null(&self) -> bool {
        self.is_none()
    }
}

impl<T> Nullable for &T
where
    T: Nullable + ?Sized,
{
    fn is_null(&self) -> bool {
        (**self).is_null()
    }
}

impl<T> Nullable for Box<T>
where
    T: Nullable + ?Sized,
{
    fn is_null(&self) -> bool {
        (**self).is_null()
    }
}

impl<T> Nullable for Rc<T>
where
    T: Nullable + ?Sized,
{
    fn is_null(&self) -> bool {
        (**self).is_null()
    }
}

impl<T> Nullable for Arc<T>
where
    T: Nullable + ?Sized,
{
    fn is_null(&self) -> bool {
        (**self).is_null()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalars_are_never_null() {
        assert!(!0_i32.is_null());
        assert!(!0.0_f64.is_null());
        assert!(!false.is_null());
        assert!(!'\0'.is_null());
        assert!(!"".is_null());
        assert!(!String::new().is_null());
        assert!(!Vec::<u8>::new().is_null());
        assert!(!().is_null());
    }

    #[test]
    fn option() {
        assert!(None::<i32>.is_null());
        assert!(!Some(0).is_null());
        assert!(!Some(None::<i32>).is_null());
    }

    #[test]
    fn pointers_delegate() {
        assert!(Box::new(None::<u8>).is_null());
        assert!(Arc::new(None::<u8>).is_null());
        assert!(Rc::new(None::<u8>).is_null());
        assert!((&None::<u8>).is_null());
        assert!(!Arc::<str>::from("abc").is_null());
        assert!(!Box::new(Some(1)).is_null());
    }
}
