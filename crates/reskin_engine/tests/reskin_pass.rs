//! End-to-end re-skin passes over a screen's bindings

use std::cell::RefCell;
use std::rc::Rc;

use reskin_core::elements::Label;
use reskin_core::{
    Attr, AttrValue, AttributeSet, Background, Color, Drawable, ResourceId, ResourceRegistry,
    SharedElement,
};
use reskin_engine::{
    DynamicAttribute, Palette, ScreenSkin, SelfThemed, SharedSelfThemed, SkinManager, Theme,
};

fn text_color_of(element: &SharedElement) -> Option<Color> {
    element.borrow_mut().as_text_mut().unwrap().text_color()
}

fn image_of(element: &SharedElement) -> Option<Drawable> {
    element.borrow_mut().as_image_mut().unwrap().image().cloned()
}

fn background_of(element: &SharedElement) -> Option<Background> {
    element.borrow().background().cloned()
}

/// Self-theming element recording every invocation
#[derive(Default)]
struct Swatch {
    invocations: usize,
    last_theme: Option<String>,
}

impl SelfThemed for Swatch {
    fn re_skin(&mut self, theme: &dyn Theme) {
        self.invocations += 1;
        self.last_theme = Some(theme.name().to_string());
    }
}

#[test]
fn classified_bindings_follow_the_active_theme() {
    let mut resources = ResourceRegistry::new();
    let text_id = resources.declare_color("text_primary");
    let src_id = resources.declare_image("logo");
    let bg_id = resources.declare_color("surface");

    let mut screen = ScreenSkin::install(Rc::new(resources));
    let label = screen
        .build_element(
            "Label",
            &AttributeSet::new().with(Attr::TextColor, AttrValue::Resource(text_id)),
        )
        .unwrap();
    let image = screen
        .build_element(
            "ImageBox",
            &AttributeSet::new().with(Attr::Src, AttrValue::Resource(src_id)),
        )
        .unwrap();
    let panel = screen
        .build_element(
            "Panel",
            &AttributeSet::new().with(Attr::Background, AttrValue::Resource(bg_id)),
        )
        .unwrap();

    let day = Palette::new("day")
        .with_color(text_id, Color::hex(0x222222))
        .with_drawable(src_id, Drawable::new("logo_day"))
        .with_color(bg_id, Color::hex(0xFFFFFF));
    screen.re_skin(&day);

    assert_eq!(text_color_of(&label), Some(Color::hex(0x222222)));
    assert_eq!(image_of(&image), Some(Drawable::new("logo_day")));
    assert_eq!(
        background_of(&panel),
        Some(Background::Color(Color::hex(0xFFFFFF)))
    );
}

#[test]
fn themes_apply_in_sequence_and_misses_keep_the_prior_value() {
    let mut resources = ResourceRegistry::new();
    resources.declare_at(
        ResourceId(0x7F01_0001),
        "text_primary",
        reskin_core::ResourceCategory::Color,
    );
    let id = ResourceId(0x7F01_0001);

    let mut screen = ScreenSkin::install(Rc::new(resources));
    let label = screen
        .build_element(
            "Label",
            &AttributeSet::new().with(Attr::TextColor, AttrValue::Resource(id)),
        )
        .unwrap();

    let t1 = Palette::new("t1").with_color(id, Color::hex(0x112233));
    let t2 = Palette::new("t2").with_color(id, Color::hex(0x445566));
    let t3 = Palette::new("t3"); // omits the resource entirely

    screen.re_skin(&t1);
    assert_eq!(text_color_of(&label), Some(Color::hex(0x112233)));
    screen.re_skin(&t2);
    assert_eq!(text_color_of(&label), Some(Color::hex(0x445566)));
    screen.re_skin(&t3);
    assert_eq!(text_color_of(&label), Some(Color::hex(0x445566)));
}

#[test]
fn dead_bindings_are_skipped_without_disturbing_the_pass() {
    let mut resources = ResourceRegistry::new();
    let id = resources.declare_color("text_primary");

    let mut screen = ScreenSkin::install(Rc::new(resources));
    let attrs = AttributeSet::new().with(Attr::TextColor, AttrValue::Resource(id));
    let doomed = screen.build_element("Label", &attrs).unwrap();
    let survivor = screen.build_element("Label", &attrs).unwrap();

    drop(doomed);

    let night = Palette::new("night").with_color(id, Color::hex(0xEEEEEE));
    screen.re_skin(&night);
    assert_eq!(text_color_of(&survivor), Some(Color::hex(0xEEEEEE)));
    // Two bindings remain recorded; pruning is lazy, not eager.
    assert_eq!(screen.registry().text_colors().len(), 2);
}

#[test]
fn reserved_range_ids_never_enter_the_registry() {
    let resources = ResourceRegistry::new();
    let mut screen = ScreenSkin::install(Rc::new(resources));

    // A platform built-in color id, below the application range.
    let builtin = ResourceId(0x0105_0003);
    let label = screen
        .build_element(
            "Label",
            &AttributeSet::new().with(Attr::TextColor, AttrValue::Resource(builtin)),
        )
        .unwrap();

    assert!(screen.registry().is_empty());

    let theme = Palette::new("any").with_color(builtin, Color::hex(0xFF0000));
    screen.re_skin(&theme);
    assert_eq!(text_color_of(&label), None);
}

#[test]
fn clear_then_theme_change_mutates_nothing() {
    let mut resources = ResourceRegistry::new();
    let id = resources.declare_color("text_primary");

    let mut screen = ScreenSkin::install(Rc::new(resources));
    let label = screen
        .build_element(
            "Label",
            &AttributeSet::new().with(Attr::TextColor, AttrValue::Resource(id)),
        )
        .unwrap();

    let swatch = Rc::new(RefCell::new(Swatch::default()));
    let as_self_themed: SharedSelfThemed = swatch.clone();
    screen.register_self_themed(&as_self_themed);

    screen.clear();

    let theme = Palette::new("day").with_color(id, Color::hex(0x445566));
    screen.re_skin(&theme);

    assert_eq!(text_color_of(&label), None);
    assert_eq!(swatch.borrow().invocations, 0);
}

#[test]
fn self_themed_registration_is_not_deduplicated() {
    let resources = ResourceRegistry::new();
    let mut screen = ScreenSkin::install(Rc::new(resources));

    let swatch = Rc::new(RefCell::new(Swatch::default()));
    let as_self_themed: SharedSelfThemed = swatch.clone();
    screen.register_self_themed(&as_self_themed);
    screen.register_self_themed(&as_self_themed);

    screen.re_skin(&Palette::new("t1"));
    assert_eq!(swatch.borrow().invocations, 2);

    screen.unregister_self_themed(&as_self_themed);
    screen.re_skin(&Palette::new("t2"));
    assert_eq!(swatch.borrow().invocations, 3);
    assert_eq!(swatch.borrow().last_theme.as_deref(), Some("t2"));
}

#[test]
fn image_category_backgrounds_use_the_image_setter() {
    let mut resources = ResourceRegistry::new();
    let id = resources.declare_image("backdrop");

    let mut screen = ScreenSkin::install(Rc::new(resources));
    let panel = screen
        .build_element(
            "Panel",
            &AttributeSet::new().with(Attr::Background, AttrValue::Resource(id)),
        )
        .unwrap();

    // The theme defines both a color and a drawable under the same numeric
    // id; the bind-time category must pick the drawable.
    let theme = Palette::new("day")
        .with_color(id, Color::hex(0x00FF00))
        .with_drawable(id, Drawable::new("backdrop_day"));
    screen.re_skin(&theme);

    assert_eq!(
        background_of(&panel),
        Some(Background::Image(Drawable::new("backdrop_day")))
    );
}

#[test]
fn dynamic_registration_tracks_code_built_elements() {
    let mut resources = ResourceRegistry::new();
    let text_id = resources.declare_color("text_primary");
    let bg_id = resources.declare_image("backdrop");

    let mut screen = ScreenSkin::install(Rc::new(resources));

    // Assembled in code, bypassing construction interception entirely.
    let label: SharedElement = Rc::new(RefCell::new(Label::new("added in code")));
    screen.register_dynamic(
        &label,
        &[
            DynamicAttribute::new(Attr::TextColor, text_id),
            DynamicAttribute::new(Attr::Background, bg_id),
            // Not a skinnable kind; ignored.
            DynamicAttribute::new(Attr::Text, text_id),
        ],
    );
    assert_eq!(screen.registry().len(), 2);

    let theme = Palette::new("night")
        .with_color(text_id, Color::hex(0xDDDDDD))
        .with_drawable(bg_id, Drawable::new("backdrop_night"));
    screen.re_skin(&theme);

    assert_eq!(text_color_of(&label), Some(Color::hex(0xDDDDDD)));
    assert_eq!(
        background_of(&label),
        Some(Background::Image(Drawable::new("backdrop_night")))
    );
}

#[test]
fn manager_broadcasts_to_live_screens_and_prunes_dead_ones() {
    let mut resources = ResourceRegistry::new();
    let id = resources.declare_color("text_primary");
    let resources = Rc::new(resources);

    let build_screen = |resources: &Rc<ResourceRegistry>| {
        let table = Rc::clone(resources);
        let mut screen = ScreenSkin::install(table);
        let label = screen
            .build_element(
                "Label",
                &AttributeSet::new().with(Attr::TextColor, AttrValue::Resource(id)),
            )
            .unwrap();
        (Rc::new(RefCell::new(screen)), label)
    };

    let (screen_a, label_a) = build_screen(&resources);
    let (screen_b, label_b) = build_screen(&resources);

    let initial: Rc<dyn Theme> = Rc::new(Palette::new("day").with_color(id, Color::hex(0x111111)));
    let mut manager = SkinManager::new(initial);
    manager.register_screen(&screen_a);
    manager.register_screen(&screen_b);

    let night: Rc<dyn Theme> =
        Rc::new(Palette::new("night").with_color(id, Color::hex(0xEEEEEE)));
    manager.set_theme(night);
    assert_eq!(text_color_of(&label_a), Some(Color::hex(0xEEEEEE)));
    assert_eq!(text_color_of(&label_b), Some(Color::hex(0xEEEEEE)));
    assert_eq!(manager.theme().name(), "night");

    // Screen B is torn down without unregistering; the next switch prunes it.
    drop(screen_b);
    let day: Rc<dyn Theme> = Rc::new(Palette::new("day2").with_color(id, Color::hex(0x222222)));
    manager.set_theme(day);
    assert_eq!(text_color_of(&label_a), Some(Color::hex(0x222222)));
    assert_eq!(text_color_of(&label_b), Some(Color::hex(0xEEEEEE)));
}
