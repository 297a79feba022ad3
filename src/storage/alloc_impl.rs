use alloc::vec::Vec;
use super::ListStorage;

unsafe impl<T> ListStorage for Vec<T> {
    type Element = T;

    #[inline(always)]
    fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity(capacity)
    }
    #[inline(always)]
    fn push(&mut self, element: Self::Element) {
        self.push(element)
    }
    #[inline(always)]
    fn pop(&mut self) -> Option<Self::Element> {
        self.pop()
    }
    #[inline(always)]
    fn len(&self) -> usize {
        self.len()
    }
    #[inline(always)]
    unsafe fn get_unchecked(&self, index: usize) -> &Self::Element {
        (**self).get_unchecked(index)
    }
    #[inline(always)]
    unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut Self::Element {
        (**self).get_unchecked_mut(index)
    }

    #[inline(always)]
    fn get(&self, index: usize) -> Option<&Self::Element> {
        (**self).get(index)
    }
    #[inline(always)]
    fn get_mut(&mut self, index: usize) -> Option<&mut Self::Element> {
        (**self).get_mut(index)
    }
    #[inline(always)]
    fn new() -> Self {
        Self::new()
    }
    #[inline(always)]
    fn capacity(&self) -> usize {
        self.capacity()
    }
    #[inline(always)]
    fn reserve(&mut self, additional: usize) {
        self.reserve(additional)
    }
    #[inline(always)]
    fn shrink_to_fit(&mut self) {
        self.shrink_to_fit()
    }
}
