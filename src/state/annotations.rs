// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Ordered, identity-unique list of annotations.
//!
//! Order is z-order: later entries draw on top. Lookups are linear scans;
//! sessions hold tens of objects, not thousands.

use crate::models::annotation::{Annotation, AnnotationId};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnnotationList {
    items: Vec<Annotation>,
}

impl AnnotationList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a list. A later duplicate id overwrites the earlier entry in place.
    pub fn from_vec(items: Vec<Annotation>) -> Self {
        let mut list = Self::new();
        list.replace_all(items);
        list
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Annotation> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[Annotation] {
        &self.items
    }

    pub fn position(&self, id: AnnotationId) -> Option<usize> {
        self.items.iter().position(|a| a.id == id)
    }

    pub fn get(&self, id: AnnotationId) -> Option<&Annotation> {
        self.items.iter().find(|a| a.id == id)
    }

    pub fn contains(&self, id: AnnotationId) -> bool {
        self.position(id).is_some()
    }

    /// Append at the top of the z-order. An annotation whose id is already
    /// present replaces the existing entry in place instead.
    pub fn add(&mut self, annotation: Annotation) {
        match self.position(annotation.id) {
            Some(idx) => self.items[idx] = annotation,
            None => self.items.push(annotation),
        }
    }

    /// Substitute the entry with the same id. Returns `false` if absent.
    pub fn replace(&mut self, annotation: Annotation) -> bool {
        match self.position(annotation.id) {
            Some(idx) => {
                self.items[idx] = annotation;
                true
            }
            None => false,
        }
    }

    /// Remove by id. Returns the removed annotation, if any.
    pub fn remove(&mut self, id: AnnotationId) -> Option<Annotation> {
        let idx = self.position(id)?;
        Some(self.items.remove(idx))
    }

    /// Replace the whole sequence.
    pub fn replace_all(&mut self, items: Vec<Annotation>) {
        self.items.clear();
        self.items.reserve(items.len());
        for annotation in items {
            self.add(annotation);
        }
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Move to the top of the z-order.
    pub fn bring_to_front(&mut self, id: AnnotationId) -> bool {
        match self.position(id) {
            Some(idx) => {
                let annotation = self.items.remove(idx);
                self.items.push(annotation);
                true
            }
            None => false,
        }
    }

    /// Move to the bottom of the z-order.
    pub fn send_to_back(&mut self, id: AnnotationId) -> bool {
        match self.position(id) {
            Some(idx) => {
                let annotation = self.items.remove(idx);
                self.items.insert(0, annotation);
                true
            }
            None => false,
        }
    }
}

impl<'a> IntoIterator for &'a AnnotationList {
    type Item = &'a Annotation;
    type IntoIter = std::slice::Iter<'a, Annotation>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::annotation::{Point, Shape};

    fn counter(number: u32) -> Annotation {
        Annotation::new(Shape::Counter {
            at: Point::new(0.5, 0.5),
            number,
        })
    }

    fn numbers(list: &AnnotationList) -> Vec<u32> {
        list.iter()
            .map(|a| match a.shape {
                Shape::Counter { number, .. } => number,
                _ => 0,
            })
            .collect()
    }

    #[test]
    fn test_add_appends_in_order() {
        let mut list = AnnotationList::new();
        list.add(counter(1));
        list.add(counter(2));
        list.add(counter(3));
        assert_eq!(numbers(&list), vec![1, 2, 3]);
    }

    #[test]
    fn test_replace_keeps_position() {
        let mut list = AnnotationList::new();
        let first = counter(1);
        list.add(first.clone());
        list.add(counter(2));

        let mut changed = first;
        changed.shape = Shape::Counter {
            at: Point::new(0.1, 0.1),
            number: 9,
        };
        assert!(list.replace(changed));
        assert_eq!(numbers(&list), vec![9, 2]);
    }

    #[test]
    fn test_absent_identity_is_noop() {
        let mut list = AnnotationList::new();
        list.add(counter(1));
        assert!(!list.replace(counter(5)));
        assert!(list.remove(AnnotationId::new()).is_none());
        assert!(!list.bring_to_front(AnnotationId::new()));
        assert_eq!(numbers(&list), vec![1]);
    }

    #[test]
    fn test_remove_filters_matching_id() {
        let mut list = AnnotationList::new();
        let a = counter(1);
        let b = counter(2);
        list.add(a.clone());
        list.add(b.clone());
        assert_eq!(list.remove(a.id).map(|r| r.id), Some(a.id));
        assert_eq!(list.len(), 1);
        assert!(list.contains(b.id));
    }

    #[test]
    fn test_duplicate_ids_stay_unique() {
        let a = counter(1);
        let mut dup = a.clone();
        dup.shape = Shape::Counter {
            at: Point::new(0.0, 0.0),
            number: 7,
        };
        let list = AnnotationList::from_vec(vec![a, counter(2), dup]);
        assert_eq!(numbers(&list), vec![7, 2]);
    }

    #[test]
    fn test_z_order_moves() {
        let mut list = AnnotationList::new();
        let a = counter(1);
        let c = counter(3);
        list.add(a.clone());
        list.add(counter(2));
        list.add(c.clone());
        assert!(list.bring_to_front(a.id));
        assert_eq!(numbers(&list), vec![2, 3, 1]);
        assert!(list.send_to_back(c.id));
        assert_eq!(numbers(&list), vec![3, 2, 1]);
    }
}
