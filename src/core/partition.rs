// Layout Partitioner
// Splits the tab list into the groups left and right of the center action

use super::tab_item::TabDescriptor;

/// A tab paired with its absolute index in the original list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacedTab<'a> {
    pub descriptor: &'a TabDescriptor,
    pub index: usize,
}

/// Left and right tab groups around the (optional) center gap
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Partition<'a> {
    pub left: Vec<PlacedTab<'a>>,
    pub right: Vec<PlacedTab<'a>>,
    reserves_gap: bool,
}

impl<'a> Partition<'a> {
    /// Whether a center gap is reserved between the groups
    pub fn reserves_gap(&self) -> bool {
        self.reserves_gap
    }

    pub fn len(&self) -> usize {
        self.left.len() + self.right.len()
    }

    pub fn is_empty(&self) -> bool {
        self.left.is_empty() && self.right.is_empty()
    }

    /// Left group followed by right group, i.e. the original order
    pub fn iter(&self) -> impl Iterator<Item = &PlacedTab<'a>> {
        self.left.iter().chain(self.right.iter())
    }
}

/// Split `tabs` at `len / 2`; right-hand indices are offset by the midpoint
pub fn partition(tabs: &[TabDescriptor], has_center_button: bool) -> Partition<'_> {
    let mid = tabs.len() / 2;
    let (left, right) = tabs.split_at(mid);

    Partition {
        left: left
            .iter()
            .enumerate()
            .map(|(index, descriptor)| PlacedTab { descriptor, index })
            .collect(),
        right: right
            .iter()
            .enumerate()
            .map(|(offset, descriptor)| PlacedTab {
                descriptor,
                index: mid + offset,
            })
            .collect(),
        reserves_gap: has_center_button,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_tabs() -> Vec<TabDescriptor> {
        vec![
            TabDescriptor::new("house.fill", "Home"),
            TabDescriptor::new("safari", "Explore").with_notification(true),
            TabDescriptor::new("chart.bar", "Activity"),
            TabDescriptor::new("person", "Profile"),
        ]
    }

    fn indices(group: &[PlacedTab<'_>]) -> Vec<usize> {
        group.iter().map(|p| p.index).collect()
    }

    fn titles<'a>(group: &[PlacedTab<'a>]) -> Vec<&'a str> {
        group.iter().map(|p| p.descriptor.title.as_str()).collect()
    }

    #[test]
    fn test_four_tabs_split_evenly() {
        let tabs = sample_tabs();
        let split = partition(&tabs, true);

        assert_eq!(titles(&split.left), vec!["Home", "Explore"]);
        assert_eq!(indices(&split.left), vec![0, 1]);
        assert_eq!(titles(&split.right), vec!["Activity", "Profile"]);
        assert_eq!(indices(&split.right), vec![2, 3]);
        assert!(split.left[1].descriptor.has_notification);
        assert!(split.reserves_gap());
    }

    #[test]
    fn test_empty_list() {
        let split = partition(&[], true);
        assert!(split.left.is_empty());
        assert!(split.right.is_empty());
        assert!(split.is_empty());
    }

    #[test]
    fn test_single_tab_goes_right() {
        let tabs = vec![TabDescriptor::new("house.fill", "Home")];
        let split = partition(&tabs, true);

        assert!(split.left.is_empty());
        assert_eq!(titles(&split.right), vec!["Home"]);
        assert_eq!(indices(&split.right), vec![0]);
    }

    #[test]
    fn test_sizes_and_order_for_many_lengths() {
        for n in 0..12 {
            let tabs: Vec<TabDescriptor> = (0..n)
                .map(|i| TabDescriptor::new("circle", format!("Tab {i}")))
                .collect();
            let split = partition(&tabs, false);

            assert_eq!(split.left.len(), n / 2);
            assert_eq!(split.left.len() + split.right.len(), n);

            let rebuilt: Vec<&TabDescriptor> = split.iter().map(|p| p.descriptor).collect();
            let original: Vec<&TabDescriptor> = tabs.iter().collect();
            assert_eq!(rebuilt, original);
            assert_eq!(split.iter().map(|p| p.index).collect::<Vec<_>>(), (0..n).collect::<Vec<_>>());
        }
    }

    #[test]
    fn test_center_flag_does_not_change_split() {
        let tabs = sample_tabs();
        let with_gap = partition(&tabs, true);
        let without_gap = partition(&tabs, false);

        assert_eq!(with_gap.left, without_gap.left);
        assert_eq!(with_gap.right, without_gap.right);
        assert!(!without_gap.reserves_gap());
    }
}
