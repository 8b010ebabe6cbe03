use std::collections::BTreeSet;

/// A message box button. Variants are declared in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Button {
    Ok,
    Yes,
    No,
    All,
    Cancel,
}

impl Button {
    /// Label with `&` before the hotkey letter.
    pub fn label(self) -> &'static str {
        match self {
            Button::Ok => "&Ok",
            Button::Yes => "&Yes",
            Button::No => "&No",
            Button::All => "&All",
            Button::Cancel => "&Cancel",
        }
    }

    /// Label split around the hotkey: text before it, the hotkey, the rest.
    pub fn label_parts(self) -> (&'static str, &'static str, &'static str) {
        let label = self.label();
        let Some(amp) = label.find('&') else {
            return ("", "", label);
        };
        let hot_start = amp + 1;
        let hot_end = label[hot_start..]
            .chars()
            .next()
            .map_or(hot_start, |c| hot_start + c.len_utf8());
        (&label[..amp], &label[hot_start..hot_end], &label[hot_end..])
    }

    pub fn hotkey(self) -> Option<char> {
        self.label_parts().1.chars().next()
    }

    /// Label as shown, without the `&`.
    pub fn text(self) -> String {
        let (pre, hot, post) = self.label_parts();
        format!("{pre}{hot}{post}")
    }

    pub fn matches_hotkey(self, c: char) -> bool {
        self.hotkey()
            .is_some_and(|hot| hot.to_lowercase().eq(c.to_lowercase()))
    }
}

/// The buttons shown by one message box, iterated in display order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ButtonSet(BTreeSet<Button>);

impl ButtonSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ok() -> Self {
        [Button::Ok].into_iter().collect()
    }

    pub fn ok_cancel() -> Self {
        [Button::Ok, Button::Cancel].into_iter().collect()
    }

    pub fn yes_no() -> Self {
        [Button::Yes, Button::No].into_iter().collect()
    }

    pub fn yes_no_all() -> Self {
        [Button::Yes, Button::No, Button::All].into_iter().collect()
    }

    pub fn with(mut self, button: Button) -> Self {
        self.0.insert(button);
        self
    }

    pub fn contains(&self, button: Button) -> bool {
        self.0.contains(&button)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Button> + '_ {
        self.0.iter().copied()
    }
}

impl FromIterator<Button> for ButtonSet {
    fn from_iter<I: IntoIterator<Item = Button>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
