use maud::{Markup, PreEscaped, Render};

/// Icons from the `/static/icons.svg` sprite.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Menu,
    Close,
    MapPin,
    Star,
    ChevronRight,
    Phone,
    Instagram,
    Facebook,
    Calendar,
    Utensils,
}

impl Icon {
    pub fn id(self) -> &'static str {
        match self {
            Icon::Menu => "menu",
            Icon::Close => "x",
            Icon::MapPin => "map-pin",
            Icon::Star => "star",
            Icon::ChevronRight => "chevron-right",
            Icon::Phone => "phone",
            Icon::Instagram => "instagram",
            Icon::Facebook => "facebook",
            Icon::Calendar => "calendar",
            Icon::Utensils => "utensils",
        }
    }

    pub fn sized(self, size: u32) -> Markup {
        // `use` is not expressible as a maud element name
        PreEscaped(format!(
            r##"<svg class="icon icon-{id}" width="{size}" height="{size}" aria-hidden="true"><use href="/static/icons.svg#{id}"></use></svg>"##,
            id = self.id(),
            size = size
        ))
    }
}

impl Render for Icon {
    fn render(&self) -> Markup {
        self.sized(24)
    }
}
