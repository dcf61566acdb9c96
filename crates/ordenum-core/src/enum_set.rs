//! Ordered sets of enum constants.
//!
//! An [`EnumSet`] holds constants of exactly one enum type as a bit set over
//! ordinals, so iteration is always in ascending ordinal order. Creating a set
//! materialises the full domain of its type once; from then on every operation
//! is infallible except where operands of another type are involved.
//!
//! Set algebra (`union`, `intersect`, `diff`, `symmetric_diff`, `complement`)
//! returns new sets and never mutates the operands.

use crate::instance::EnumInstance;
use crate::registry::EnumType;
use fixedbitset::FixedBitSet;
use ordenum_common::limits::{MAX_BITMASK_WIDTH, fits_bitmask};
use ordenum_common::{EnumError, Result};
use std::fmt;

#[derive(Clone)]
pub struct EnumSet {
    enum_type: &'static EnumType,
    domain: &'static [&'static EnumInstance],
    members: FixedBitSet,
}

impl EnumSet {
    /// An empty set of `enum_type`.
    ///
    /// Fails when the type's declaration is invalid.
    pub fn new(enum_type: &'static EnumType) -> Result<Self> {
        let domain = enum_type.all_instances()?;
        Ok(Self {
            enum_type,
            domain,
            members: FixedBitSet::with_capacity(domain.len()),
        })
    }

    pub fn of<'a>(
        enum_type: &'static EnumType,
        items: impl IntoIterator<Item = &'a EnumInstance>,
    ) -> Result<Self> {
        let mut set = Self::new(enum_type)?;
        set.extend(items)?;
        Ok(set)
    }

    /// Every constant of `enum_type`.
    pub fn all_of(enum_type: &'static EnumType) -> Result<Self> {
        let mut set = Self::new(enum_type)?;
        set.members.insert_range(..);
        Ok(set)
    }

    /// Decodes a bitmask: bit `i` selects the constant with ordinal `i`.
    pub fn from_bitmask(enum_type: &'static EnumType, mask: u64) -> Result<Self> {
        let mut set = Self::new(enum_type)?;
        let size = set.domain.len();
        set.check_bitmask_domain()?;
        if size < MAX_BITMASK_WIDTH as usize && mask >> size != 0 {
            return Err(EnumError::InvalidBitmask {
                enum_name: enum_type.name().to_string(),
                mask,
                size,
            });
        }
        for ordinal in 0..size {
            if mask & (1 << ordinal) != 0 {
                set.members.insert(ordinal);
            }
        }
        Ok(set)
    }

    /// All constants between `from` and `to`, inclusive, in either argument order.
    pub fn range(from: &EnumInstance, to: &EnumInstance) -> Result<Self> {
        if !from.is_same_type(to) {
            return Err(EnumError::type_mismatch(
                from.enum_type().name(),
                to.enum_type().name(),
            ));
        }
        let (lo, hi) = if from.ordinal() <= to.ordinal() {
            (from.ordinal(), to.ordinal())
        } else {
            (to.ordinal(), from.ordinal())
        };
        let mut set = Self::new(from.enum_type())?;
        set.members.insert_range(lo..hi + 1);
        Ok(set)
    }

    pub fn enum_type(&self) -> &'static EnumType {
        self.enum_type
    }

    pub fn len(&self) -> usize {
        self.members.count_ones(..)
    }

    pub fn is_empty(&self) -> bool {
        self.members.count_ones(..) == 0
    }

    fn check_member(&self, item: &EnumInstance) -> Result<usize> {
        if item.enum_type() == self.enum_type {
            Ok(item.ordinal())
        } else {
            Err(EnumError::type_mismatch(
                self.enum_type.name(),
                item.enum_type().name(),
            ))
        }
    }

    fn check_operand(&self, other: &EnumSet) -> Result<()> {
        if other.enum_type == self.enum_type {
            Ok(())
        } else {
            Err(EnumError::type_mismatch(
                self.enum_type.name(),
                other.enum_type.name(),
            ))
        }
    }

    fn check_bitmask_domain(&self) -> Result<()> {
        if fits_bitmask(self.domain.len()) {
            Ok(())
        } else {
            Err(EnumError::DomainTooLarge {
                enum_name: self.enum_type.name().to_string(),
                size: self.domain.len(),
                max: MAX_BITMASK_WIDTH,
            })
        }
    }

    /// Returns `true` if `item` was not already present.
    pub fn add(&mut self, item: &EnumInstance) -> Result<bool> {
        let ordinal = self.check_member(item)?;
        Ok(!self.members.put(ordinal))
    }

    /// Returns `true` if `item` was present.
    pub fn remove(&mut self, item: &EnumInstance) -> Result<bool> {
        let ordinal = self.check_member(item)?;
        let was_present = self.members.contains(ordinal);
        self.members.set(ordinal, false);
        Ok(was_present)
    }

    pub fn contains(&self, item: &EnumInstance) -> Result<bool> {
        let ordinal = self.check_member(item)?;
        Ok(self.members.contains(ordinal))
    }

    /// Adds every item; stops at the first item of another type.
    pub fn extend<'a>(&mut self, items: impl IntoIterator<Item = &'a EnumInstance>) -> Result<()> {
        for item in items {
            self.add(item)?;
        }
        Ok(())
    }

    pub fn clear(&mut self) {
        self.members.clear();
    }

    /// Keeps only the members matching `predicate`.
    pub fn retain(&mut self, mut predicate: impl FnMut(&'static EnumInstance) -> bool) {
        for ordinal in 0..self.domain.len() {
            if self.members.contains(ordinal) && !predicate(self.domain[ordinal]) {
                self.members.set(ordinal, false);
            }
        }
    }

    /// Bit `i` is set iff the constant with ordinal `i` is a member.
    pub fn to_bitmask(&self) -> Result<u64> {
        self.check_bitmask_domain()?;
        Ok(self
            .members
            .ones()
            .fold(0u64, |mask, ordinal| mask | (1 << ordinal)))
    }

    // -------------------------------------------------------------------------
    // Set algebra
    // -------------------------------------------------------------------------

    fn combine(
        &self,
        other: &EnumSet,
        op: impl FnOnce(&mut FixedBitSet, &FixedBitSet),
    ) -> Result<EnumSet> {
        self.check_operand(other)?;
        let mut result = self.clone();
        op(&mut result.members, &other.members);
        Ok(result)
    }

    pub fn union(&self, other: &EnumSet) -> Result<EnumSet> {
        self.combine(other, FixedBitSet::union_with)
    }

    pub fn intersect(&self, other: &EnumSet) -> Result<EnumSet> {
        self.combine(other, FixedBitSet::intersect_with)
    }

    pub fn diff(&self, other: &EnumSet) -> Result<EnumSet> {
        self.combine(other, FixedBitSet::difference_with)
    }

    pub fn symmetric_diff(&self, other: &EnumSet) -> Result<EnumSet> {
        self.combine(other, FixedBitSet::symmetric_difference_with)
    }

    /// The domain minus this set.
    pub fn complement(&self) -> EnumSet {
        let mut result = self.clone();
        result.members.toggle_range(..);
        result
    }

    pub fn is_subset(&self, other: &EnumSet) -> Result<bool> {
        self.check_operand(other)?;
        Ok(self.members.is_subset(&other.members))
    }

    pub fn is_superset(&self, other: &EnumSet) -> Result<bool> {
        self.check_operand(other)?;
        Ok(self.members.is_superset(&other.members))
    }

    pub fn is_disjoint(&self, other: &EnumSet) -> Result<bool> {
        self.check_operand(other)?;
        Ok(self.members.is_disjoint(&other.members))
    }

    // -------------------------------------------------------------------------
    // Functional views
    // -------------------------------------------------------------------------

    /// Members in ascending ordinal order.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            domain: self.domain,
            ones: self.members.ones(),
        }
    }

    pub fn filter(&self, mut predicate: impl FnMut(&'static EnumInstance) -> bool) -> EnumSet {
        let mut result = self.clone();
        result.retain(&mut predicate);
        result
    }

    pub fn map<T>(&self, f: impl FnMut(&'static EnumInstance) -> T) -> Vec<T> {
        self.iter().map(f).collect()
    }

    pub fn any(&self, mut predicate: impl FnMut(&'static EnumInstance) -> bool) -> bool {
        self.iter().any(&mut predicate)
    }

    /// `true` for an empty set.
    pub fn all(&self, mut predicate: impl FnMut(&'static EnumInstance) -> bool) -> bool {
        self.iter().all(&mut predicate)
    }

    pub fn none(&self, predicate: impl FnMut(&'static EnumInstance) -> bool) -> bool {
        !self.any(predicate)
    }

    pub fn find(
        &self,
        mut predicate: impl FnMut(&'static EnumInstance) -> bool,
    ) -> Option<&'static EnumInstance> {
        self.iter().find(|item| predicate(*item))
    }

    pub fn reduce<A>(&self, initial: A, f: impl FnMut(A, &'static EnumInstance) -> A) -> A {
        self.iter().fold(initial, f)
    }

    /// The member with the lowest ordinal.
    pub fn first(&self) -> Option<&'static EnumInstance> {
        self.iter().next()
    }

    /// The member with the highest ordinal.
    pub fn last(&self) -> Option<&'static EnumInstance> {
        (0..self.domain.len())
            .rev()
            .find(|&ordinal| self.members.contains(ordinal))
            .map(|ordinal| self.domain[ordinal])
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.map(EnumInstance::name)
    }

    pub fn to_vec(&self) -> Vec<&'static EnumInstance> {
        self.iter().collect()
    }
}

/// Iterator over the members of an [`EnumSet`].
pub struct Iter<'a> {
    domain: &'static [&'static EnumInstance],
    ones: fixedbitset::Ones<'a>,
}

impl Iterator for Iter<'_> {
    type Item = &'static EnumInstance;

    fn next(&mut self) -> Option<Self::Item> {
        self.ones.next().map(|ordinal| self.domain[ordinal])
    }
}

impl<'a> IntoIterator for &'a EnumSet {
    type Item = &'static EnumInstance;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}

impl PartialEq for EnumSet {
    fn eq(&self, other: &Self) -> bool {
        self.enum_type == other.enum_type && self.members == other.members
    }
}

impl Eq for EnumSet {}

impl fmt::Debug for EnumSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.enum_type.name())?;
        f.debug_set().entries(self.iter().map(|e| e.name())).finish()
    }
}

#[cfg(test)]
#[path = "../tests/enum_set_tests.rs"]
mod tests;
