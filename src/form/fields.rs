// Declarative description of the Add-book form.
//
// Each field carries its widget kind, where its options come from, which
// field it depends on, and the settings_options row that can hide it.
// The front end renders this list in order instead of hardcoding widgets.

use serde::{Deserialize, Serialize};

/// Stable field identifiers, shared with the front end and with
/// validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldId {
    Icon,
    Dnf,
    Name,
    Author,
    Size,
    Category,
    Genre,
    Subgenre,
    Source,
    Discovery,
    DiscoveryText,
    Expectations,
    ExpectationsFailed,
    DateStart,
    DateFinish,
    Rating,
    Vibes,
    CrushList,
    MonthsLater,
    Reread,
    Line,
    Reminded,
    PhysCopy,
    Notes,
}

/// Widget kind the front end should render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldKind {
    Text,
    MultiLine,
    Checkbox,
    Radio,
    Combo,
    MultiSelect,
    Date,
    Rating,
    TagInput,
}

/// Where a field's options or suggestions come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum OptionSource {
    Icons,
    Sizes,
    Categories,
    /// Filtered by the currently selected category.
    GenresByCategory,
    /// Union over the currently selected genres; visible only for Fiction.
    SubgenresByGenres,
    Sources,
    Discoveries,
    MonthsLater,
    Reread,
    /// Autocomplete source for the author line.
    Authors,
    /// Per-token autocomplete source for the vibes tag input.
    Vibes,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldDescriptor {
    pub id: FieldId,
    pub label: &'static str,
    pub kind: FieldKind,
    pub options: Option<OptionSource>,
    /// Dependency edge of the cascade: this field's option set is derived
    /// from the named field's current selection.
    pub depends_on: Option<FieldId>,
    pub required: bool,
    /// settings_options name that toggles this field, if it is hideable.
    pub settings_option: Option<&'static str>,
}

impl FieldDescriptor {
    const fn new(id: FieldId, label: &'static str, kind: FieldKind) -> Self {
        FieldDescriptor {
            id,
            label,
            kind,
            options: None,
            depends_on: None,
            required: false,
            settings_option: None,
        }
    }

    const fn options(mut self, source: OptionSource) -> Self {
        self.options = Some(source);
        self
    }

    const fn depends_on(mut self, field: FieldId) -> Self {
        self.depends_on = Some(field);
        self
    }

    const fn required(mut self) -> Self {
        self.required = true;
        self
    }

    const fn toggled_by(mut self, option: &'static str) -> Self {
        self.settings_option = Some(option);
        self
    }
}

/// The Add-book form, in display order.
pub fn form_fields() -> Vec<FieldDescriptor> {
    use FieldId::*;
    use FieldKind::*;

    vec![
        FieldDescriptor::new(Icon, "Icon", Combo)
            .options(OptionSource::Icons)
            .toggled_by("Icon"),
        FieldDescriptor::new(Dnf, "Did not finish", Checkbox).toggled_by("DNF"),
        FieldDescriptor::new(Name, "Name", Text).required(),
        FieldDescriptor::new(Author, "Author", Text)
            .options(OptionSource::Authors)
            .toggled_by("Author"),
        FieldDescriptor::new(Size, "Size", Combo)
            .options(OptionSource::Sizes)
            .toggled_by("Size"),
        FieldDescriptor::new(Category, "Category", Radio)
            .options(OptionSource::Categories)
            .toggled_by("Category"),
        FieldDescriptor::new(Genre, "Genre", MultiSelect)
            .options(OptionSource::GenresByCategory)
            .depends_on(Category)
            .toggled_by("Genre"),
        FieldDescriptor::new(Subgenre, "Subgenre", MultiSelect)
            .options(OptionSource::SubgenresByGenres)
            .depends_on(Genre)
            .toggled_by("Subgenre"),
        FieldDescriptor::new(Source, "Source", MultiSelect)
            .options(OptionSource::Sources)
            .toggled_by("Source"),
        FieldDescriptor::new(Discovery, "Where did I hear about it?", MultiSelect)
            .options(OptionSource::Discoveries)
            .toggled_by("Where did I hear about it"),
        FieldDescriptor::new(DiscoveryText, "Where did I hear about it? (extra)", Text)
            .toggled_by("Where did I hear about it"),
        FieldDescriptor::new(Expectations, "My expectations", MultiLine)
            .toggled_by("My expectations"),
        FieldDescriptor::new(
            ExpectationsFailed,
            "How different it is from my expectations",
            MultiLine,
        )
        .toggled_by("How different it is from my expectations"),
        FieldDescriptor::new(DateStart, "Date started", Date).toggled_by("Date started"),
        FieldDescriptor::new(DateFinish, "Date finished", Date).toggled_by("Date finished"),
        FieldDescriptor::new(FieldId::Rating, "Rating", FieldKind::Rating).toggled_by("Rating"),
        FieldDescriptor::new(Vibes, "Vibes", TagInput)
            .options(OptionSource::Vibes)
            .toggled_by("Vibe"),
        FieldDescriptor::new(CrushList, "Character crush list", Text)
            .toggled_by("Character crush list"),
        FieldDescriptor::new(MonthsLater, "Do I remember it later?", Radio)
            .options(OptionSource::MonthsLater)
            .toggled_by("Do I remember it three months later?"),
        FieldDescriptor::new(Reread, "Would I reread it?", Radio)
            .options(OptionSource::Reread)
            .toggled_by("Would I reread it?"),
        FieldDescriptor::new(Line, "That line that got me", Text)
            .toggled_by("That line that got me"),
        FieldDescriptor::new(Reminded, "What it reminded me of", Text)
            .toggled_by("What it reminded me of"),
        FieldDescriptor::new(PhysCopy, "Need a physical copy?", Radio)
            .toggled_by("Do I need a physical copy?"),
        FieldDescriptor::new(Notes, "Notes", MultiLine).toggled_by("Notes"),
    ]
}
