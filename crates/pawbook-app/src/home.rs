//! The Home view-model.
//!
//! Owns the UI state behind the directory page: the person list, the page
//! cursor, pending dimension filters, and the detail modal. All fetches go
//! through the [`DirectoryApi`] seam; async methods take `&mut self`, so a
//! single view-model never has two mutations in flight at once.

use crate::directory::DirectoryApi;
use crate::render::{CardProps, DetailModal, SelectedImage};
use pawbook::{Person, PersonListParams, Pet};
use std::sync::Arc;
use tracing::{debug, warn};

/// What a card click opens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailVariant {
    /// Preview the card's image, with a grayscale toggle.
    Image,
    /// Load and show the person's pets.
    Pets,
}

/// Which filter input changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterField {
    Width,
    Height,
}

/// State machine behind the directory page.
pub struct Home {
    directory: Arc<dyn DirectoryApi>,
    variant: DetailVariant,
    /// Pending filter text, exactly as typed. Validated only when a fetch
    /// builds its URL.
    width_filter: String,
    height_filter: String,
    /// Uncommitted page cursor, advanced optimistically during navigation.
    page_index: u32,
    /// Committed page, updated once a navigation settles.
    current_page_index: u32,
    is_loading: bool,
    persons: Vec<Person>,
    modal: Option<DetailModal>,
}

impl Home {
    /// Create the view-model and run the initial, unfiltered fetch.
    ///
    /// A failed initial fetch leaves the list empty; the error is logged
    /// and loading still clears so the view settles on the empty state.
    pub async fn mount(directory: Arc<dyn DirectoryApi>, variant: DetailVariant) -> Self {
        let mut home = Self {
            directory,
            variant,
            width_filter: String::new(),
            height_filter: String::new(),
            page_index: 0,
            current_page_index: 0,
            is_loading: true,
            persons: Vec::new(),
            modal: None,
        };

        match home.directory.get_persons(None).await {
            Ok(persons) => home.persons = persons,
            Err(e) => warn!("Initial person fetch failed: {}", e),
        }
        home.is_loading = false;

        home
    }

    // ========================================
    // Accessors
    // ========================================

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn persons(&self) -> &[Person] {
        &self.persons
    }

    /// The committed page index, zero-based.
    pub fn current_page_index(&self) -> u32 {
        self.current_page_index
    }

    /// One-based page label for the footer.
    pub fn page_label(&self) -> String {
        (self.current_page_index + 1).to_string()
    }

    pub fn show_modal(&self) -> bool {
        self.modal.is_some()
    }

    pub fn modal(&self) -> Option<&DetailModal> {
        self.modal.as_ref()
    }

    /// The image in the open modal, if the image variant is showing.
    pub fn selected_image(&self) -> Option<&SelectedImage> {
        match &self.modal {
            Some(DetailModal::Image(image)) => Some(image),
            _ => None,
        }
    }

    /// The person in the open modal, if the pets variant is showing.
    pub fn selected_person(&self) -> Option<&Person> {
        match &self.modal {
            Some(DetailModal::Person { person, .. }) => Some(person),
            _ => None,
        }
    }

    /// Pets shown in the open modal; empty whenever it is closed.
    pub fn pets(&self) -> &[Pet] {
        match &self.modal {
            Some(DetailModal::Person { pets, .. }) => pets,
            _ => &[],
        }
    }

    /// Card props for the visible list.
    ///
    /// Empty while a fetch is in flight or when the list itself is empty;
    /// the two states are not distinguished.
    pub fn cards(&self) -> Vec<CardProps> {
        if self.is_loading || self.persons.is_empty() {
            return Vec::new();
        }
        self.persons.iter().map(CardProps::for_person).collect()
    }

    // ========================================
    // Transitions
    // ========================================

    /// Query parameters for a list fetch: pending filter text plus the
    /// current cursor. Empty filters are dropped by the URL builder.
    fn list_params(&self) -> PersonListParams {
        PersonListParams {
            width: Some(self.width_filter.clone()),
            height: Some(self.height_filter.clone()),
            page_index: Some(self.page_index.to_string()),
        }
    }

    /// Navigate one page forward or back.
    ///
    /// The cursor advances optimistically and rolls back if the fetch
    /// fails, leaving the stale list in place. Either way loading clears
    /// and the committed page settles to the cursor.
    pub async fn change_page(&mut self, delta: i32) {
        let next = self.page_index.saturating_add_signed(delta);
        if next == self.page_index {
            // Already at the floor.
            return;
        }

        let last_page_index = self.page_index;
        self.page_index = next;
        self.is_loading = true;

        match self.directory.get_persons(Some(&self.list_params())).await {
            Ok(persons) => self.persons = persons,
            Err(e) => {
                warn!("Fetch for page {} failed, rolling back: {}", next, e);
                self.page_index = last_page_index;
            }
        }

        self.is_loading = false;
        self.current_page_index = self.page_index;
    }

    /// Record a keystroke in one of the filter inputs. Nothing is fetched
    /// or validated until [`Home::apply_filters`].
    pub fn set_filter(&mut self, field: FilterField, value: &str) {
        match field {
            FilterField::Width => self.width_filter = value.to_string(),
            FilterField::Height => self.height_filter = value.to_string(),
        }
    }

    /// Re-fetch the list with the pending filters, page cursor untouched.
    ///
    /// On failure the list is left as-is and the error is logged.
    pub async fn apply_filters(&mut self) {
        match self.directory.get_persons(Some(&self.list_params())).await {
            Ok(persons) => {
                self.persons = persons;
                self.is_loading = false;
            }
            Err(e) => warn!("Filtered fetch failed: {}", e),
        }
    }

    /// Handle a click on the card at `index`.
    ///
    /// The image variant opens the modal immediately; the pets variant
    /// fetches the person's pets first and opens the modal on success.
    pub async fn select_card(&mut self, index: usize) {
        let Some(person) = self.persons.get(index) else {
            debug!("Ignoring click on missing card {}", index);
            return;
        };

        match self.variant {
            DetailVariant::Image => {
                let image = SelectedImage::new(person.id, person.avatar.clone());
                self.modal = Some(DetailModal::Image(image));
            }
            DetailVariant::Pets => {
                let person = person.clone();
                match self.directory.get_pets(Some(&person)).await {
                    Ok(pets) => self.modal = Some(DetailModal::Person { person, pets }),
                    Err(e) => {
                        warn!("Pet fetch for person {} failed: {}", person.id, e);
                    }
                }
            }
        }
    }

    /// Close the detail modal, dropping its state wholesale.
    pub fn close_modal(&mut self) {
        self.modal = None;
    }

    /// Set the grayscale toggle on the selected image by swapping in a
    /// replacement record. No-op unless the image modal is open.
    pub fn set_grayscale(&mut self, on: bool) {
        if let Some(DetailModal::Image(image)) = &self.modal {
            self.modal = Some(DetailModal::Image(image.with_grayscale(on)));
        }
    }
}
