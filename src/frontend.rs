use std::cell::RefCell;
use std::rc::Rc;

use gloo_events::EventListener;
use gloo_render::{request_animation_frame, AnimationFrame};
use gloo_timers::callback::Timeout;
use serde_json::json;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    window, Element, Event, HtmlCanvasElement, HtmlElement, MouseEvent, ScrollBehavior,
    ScrollToOptions, Storage, TouchEvent,
};
use yew::prelude::*;

use crate::backdrop::{is_mobile, Backdrop, Scene, BACKDROP_KEY};
use crate::clock::FrameClock;
use crate::content::{Section, RESUME};
use crate::cursor::{CursorFollower, DEFAULT_SMOOTHING, INTERACTIVE_MARKER, INTERACTIVE_SELECTOR};
use crate::field::{AnimatedField, PointerInput, PointerState};
use crate::geometry::pixel_to_ndc;
use crate::logging::{log_event, LogLevel};
use crate::render::Painter;
use crate::scroll_spy::{scroll_progress, ScrollSpy, Sidebar, LONG_PRESS_MS};
use crate::subscriptions::Subscriptions;

const LOG_LEVEL: LogLevel = LogLevel::Info;

fn local_storage() -> Option<Storage> {
    window()?.local_storage().ok().flatten()
}

fn read_stored_backdrop() -> Option<Backdrop> {
    let value = local_storage()?.get_item(BACKDROP_KEY).ok().flatten()?;
    Backdrop::from_str(&value)
}

fn resolve_backdrop() -> Backdrop {
    read_stored_backdrop().unwrap_or_default()
}

fn persist_backdrop(backdrop: Backdrop) {
    let stored = local_storage()
        .map(|storage| storage.set_item(BACKDROP_KEY, backdrop.as_str()).is_ok())
        .unwrap_or(false);

    if !stored {
        log_event(
            LOG_LEVEL,
            LogLevel::Warn,
            "storage_unavailable",
            json!({ "key": BACKDROP_KEY }),
        );
    }
}

fn prefers_reduced_motion() -> bool {
    window()
        .and_then(|w| {
            w.match_media("(prefers-reduced-motion: reduce)")
                .ok()
                .flatten()
        })
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

fn viewport_size() -> (f64, f64) {
    let Some(win) = window() else {
        return (1280.0, 720.0);
    };

    let width = win
        .inner_width()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(1280.0);
    let height = win
        .inner_height()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(720.0);

    (width, height)
}

fn device_pixel_ratio() -> f64 {
    window().map(|w| w.device_pixel_ratio()).unwrap_or(1.0)
}

fn scroll_offset() -> f64 {
    window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
}

fn document_height() -> f64 {
    window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
        .map(|root| f64::from(root.scroll_height()))
        .unwrap_or(0.0)
}

fn section_top(section: Section) -> Option<f64> {
    let element = window()?.document()?.get_element_by_id(section.id())?;
    let element = element.dyn_into::<HtmlElement>().ok()?;
    Some(f64::from(element.offset_top()))
}

fn scroll_to(top: f64) {
    let Some(win) = window() else {
        return;
    };
    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    win.scroll_to_with_scroll_to_options(&options);
}

fn describe(error: &JsValue) -> String {
    error.as_string().unwrap_or_else(|| format!("{error:?}"))
}

trait FrameDriven {
    fn frame_slot(&mut self) -> &mut Option<AnimationFrame>;

    fn on_frame(&mut self, timestamp_ms: f64) -> bool;
}

fn schedule_frame<T: FrameDriven + 'static>(shared: &Rc<RefCell<T>>) {
    let next = Rc::clone(shared);
    let handle = request_animation_frame(move |timestamp| {
        let keep_running = {
            let mut state = next.borrow_mut();
            state.frame_slot().take();
            state.on_frame(timestamp)
        };
        if keep_running {
            schedule_frame(&next);
        }
    });
    *shared.borrow_mut().frame_slot() = Some(handle);
}

struct Stage {
    painter: Painter,
    field: AnimatedField,
    scene: Scene,
    clock: FrameClock,
    pointer: PointerState,
    frame: Option<AnimationFrame>,
    running: bool,
}

type SharedStage = Rc<RefCell<Stage>>;

impl Stage {
    fn paint(&self) {
        if let Err(error) = self.painter.paint(&self.field, &self.scene) {
            log_event(
                LOG_LEVEL,
                LogLevel::Warn,
                "paint_failed",
                json!({ "error": describe(&error) }),
            );
        }
    }

    fn fit_viewport(&mut self) {
        let (width, height) = viewport_size();
        if let Err(error) = self.painter.resize(width, height, device_pixel_ratio()) {
            log_event(
                LOG_LEVEL,
                LogLevel::Warn,
                "canvas_resize_failed",
                json!({ "error": describe(&error) }),
            );
        }
    }

    fn input(&mut self, input: PointerInput) {
        self.field.on_input(&mut self.pointer, input);
    }

    fn point_at(&mut self, client_x: i32, client_y: i32) {
        let (width, height) = self.painter.size();
        let (x, y) = pixel_to_ndc(f64::from(client_x), f64::from(client_y), width, height);
        let ray = self.scene.camera.with_aspect(width, height).ray_through(x, y);
        let point = self.field.config().pointer_plane.intersect(&ray);
        self.input(PointerInput::Aim { ray, point });
    }

    fn stop(&mut self) {
        self.running = false;
        self.frame.take();
    }
}

impl FrameDriven for Stage {
    fn frame_slot(&mut self) -> &mut Option<AnimationFrame> {
        &mut self.frame
    }

    fn on_frame(&mut self, timestamp_ms: f64) -> bool {
        if !self.running {
            return false;
        }
        let time = self.clock.tick(timestamp_ms);
        self.field.on_frame(time.elapsed, time.delta, &self.pointer);
        self.paint();
        true
    }
}

fn mount_stage(
    canvas: HtmlCanvasElement,
    backdrop: Backdrop,
    mobile: bool,
    reduced_motion: bool,
    subscriptions: &mut Subscriptions<EventListener>,
) -> Option<SharedStage> {
    let painter = match Painter::new(canvas) {
        Ok(painter) => painter,
        Err(error) => {
            log_event(
                LOG_LEVEL,
                LogLevel::Warn,
                "canvas_unavailable",
                json!({ "backdrop": backdrop.as_str(), "error": describe(&error) }),
            );
            return None;
        }
    };

    let mut rng = fastrand::Rng::with_seed(js_sys::Date::now() as u64);
    let stage = Rc::new(RefCell::new(Stage {
        painter,
        field: AnimatedField::new(backdrop.field_config(mobile), &mut rng),
        scene: backdrop.scene(mobile),
        clock: FrameClock::new(),
        pointer: PointerState::default(),
        frame: None,
        running: !reduced_motion,
    }));
    stage.borrow_mut().fit_viewport();

    let win = window()?;
    {
        let stage = Rc::clone(&stage);
        subscriptions.hold(EventListener::new(&win, "resize", move |_| {
            let mut state = stage.borrow_mut();
            state.fit_viewport();
            if !state.running {
                state.paint();
            }
        }));
    }

    if reduced_motion {
        let mut state = stage.borrow_mut();
        let pointer = state.pointer;
        state.field.on_frame(0.0, 0.0, &pointer);
        state.paint();
        drop(state);
        return Some(stage);
    }

    {
        let stage = Rc::clone(&stage);
        subscriptions.hold(EventListener::new(&win, "mousemove", move |event| {
            if let Some(event) = event.dyn_ref::<MouseEvent>() {
                stage.borrow_mut().point_at(event.client_x(), event.client_y());
            }
        }));
    }
    {
        let stage = Rc::clone(&stage);
        subscriptions.hold(EventListener::new(&win, "mousedown", move |_| {
            stage.borrow_mut().input(PointerInput::Press);
        }));
    }
    {
        let stage = Rc::clone(&stage);
        subscriptions.hold(EventListener::new(&win, "mouseup", move |_| {
            stage.borrow_mut().input(PointerInput::Release);
        }));
    }
    {
        let stage = Rc::clone(&stage);
        subscriptions.hold(EventListener::new(&win, "click", move |_| {
            stage.borrow_mut().input(PointerInput::Click);
        }));
    }
    {
        let stage = Rc::clone(&stage);
        subscriptions.hold(EventListener::new(&win, "touchstart", move |event| {
            let Some(touch) = event
                .dyn_ref::<TouchEvent>()
                .and_then(|event| event.touches().get(0))
            else {
                return;
            };
            stage
                .borrow_mut()
                .point_at(touch.client_x(), touch.client_y());
        }));
    }
    if let Some(document) = win.document() {
        let stage = Rc::clone(&stage);
        subscriptions.hold(EventListener::new(&document, "mouseleave", move |_| {
            stage.borrow_mut().input(PointerInput::Leave);
        }));
    }

    schedule_frame(&stage);
    Some(stage)
}

#[derive(Properties, PartialEq)]
struct BackdropCanvasProps {
    backdrop: Backdrop,
    mobile: bool,
    reduced_motion: bool,
}

#[function_component(BackdropCanvas)]
fn backdrop_canvas(props: &BackdropCanvasProps) -> Html {
    let canvas_ref = use_node_ref();

    {
        let canvas_ref = canvas_ref.clone();
        use_effect_with(
            (props.backdrop, props.mobile, props.reduced_motion),
            move |&(backdrop, mobile, reduced_motion)| {
                let mut subscriptions = Subscriptions::new();
                let stage = canvas_ref.cast::<HtmlCanvasElement>().and_then(|canvas| {
                    mount_stage(canvas, backdrop, mobile, reduced_motion, &mut subscriptions)
                });

                move || {
                    if let Some(stage) = stage {
                        stage.borrow_mut().stop();
                    }
                    subscriptions.teardown();
                }
            },
        );
    }

    html! {
        <canvas class="backdrop-canvas" ref={canvas_ref} aria-hidden="true" />
    }
}

struct CursorLoop {
    indicator: HtmlElement,
    follower: CursorFollower,
    clock: FrameClock,
    frame: Option<AnimationFrame>,
    running: bool,
}

impl CursorLoop {
    fn stop(&mut self) {
        self.running = false;
        self.follower.teardown();
        self.frame.take();
    }
}

impl FrameDriven for CursorLoop {
    fn frame_slot(&mut self) -> &mut Option<AnimationFrame> {
        &mut self.frame
    }

    fn on_frame(&mut self, timestamp_ms: f64) -> bool {
        if !self.running {
            return false;
        }
        let time = self.clock.tick(timestamp_ms);
        self.follower.on_frame(time.now_ms, time.delta);

        let (x, y) = self.follower.indicator_origin();
        let _ = self
            .indicator
            .style()
            .set_property("transform", &format!("translate3d({x:.1}px, {y:.1}px, 0)"));
        self.indicator.set_class_name(&self.follower.indicator_class());
        true
    }
}

fn hover_marker(event: &Event) -> Option<String> {
    let target = event.target()?.dyn_into::<Element>().ok()?;
    let marked = target.closest(INTERACTIVE_SELECTOR).ok().flatten()?;
    marked.get_attribute("data-class")
}

fn mount_cursor(
    indicator: HtmlElement,
    subscriptions: &mut Subscriptions<EventListener>,
) -> Option<Rc<RefCell<CursorLoop>>> {
    let win = window()?;
    let cursor = Rc::new(RefCell::new(CursorLoop {
        indicator,
        follower: CursorFollower::new(DEFAULT_SMOOTHING),
        clock: FrameClock::new(),
        frame: None,
        running: true,
    }));

    {
        let cursor = Rc::clone(&cursor);
        subscriptions.hold(EventListener::new(&win, "mousemove", move |event| {
            if let Some(event) = event.dyn_ref::<MouseEvent>() {
                cursor
                    .borrow_mut()
                    .follower
                    .on_pointer_move(f64::from(event.client_x()), f64::from(event.client_y()));
            }
        }));
    }
    {
        let cursor = Rc::clone(&cursor);
        subscriptions.hold(EventListener::new(&win, "mousedown", move |event| {
            cursor.borrow_mut().follower.on_pointer_down(event.time_stamp());
        }));
    }
    {
        let cursor = Rc::clone(&cursor);
        subscriptions.hold(EventListener::new(&win, "mouseup", move |_| {
            cursor.borrow_mut().follower.on_pointer_up();
        }));
    }
    {
        let cursor = Rc::clone(&cursor);
        subscriptions.hold(EventListener::new(&win, "mouseover", move |event| {
            let marker = hover_marker(event);
            cursor.borrow_mut().follower.on_hover_target(marker.as_deref());
        }));
    }

    schedule_frame(&cursor);
    Some(cursor)
}

#[function_component(CustomCursor)]
fn custom_cursor() -> Html {
    let indicator_ref = use_node_ref();

    {
        let indicator_ref = indicator_ref.clone();
        use_effect_with((), move |_| {
            let mut subscriptions = Subscriptions::new();
            let cursor = indicator_ref
                .cast::<HtmlElement>()
                .and_then(|indicator| mount_cursor(indicator, &mut subscriptions));

            move || {
                if let Some(cursor) = cursor {
                    cursor.borrow_mut().stop();
                }
                subscriptions.teardown();
            }
        });
    }

    html! {
        <div class="custom-cursor" ref={indicator_ref} aria-hidden="true" />
    }
}

#[derive(Properties, PartialEq)]
struct SideNavProps {
    active: Section,
    sidebar: Sidebar,
    on_navigate: Callback<Section>,
    on_toggle: Callback<()>,
}

#[function_component(SideNav)]
fn side_nav(props: &SideNavProps) -> Html {
    let labelled = use_state_eq(|| None::<Section>);
    let press_timer = use_mut_ref(|| None::<Timeout>);

    let on_toggle = {
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |_: MouseEvent| on_toggle.emit(()))
    };

    let items = Section::ALL
        .iter()
        .map(|&section| {
            let is_active = props.active == section;

            let onclick = {
                let on_navigate = props.on_navigate.clone();
                Callback::from(move |_: MouseEvent| on_navigate.emit(section))
            };

            let ontouchstart = {
                let labelled = labelled.clone();
                let press_timer = press_timer.clone();
                Callback::from(move |_: TouchEvent| {
                    let labelled = labelled.clone();
                    *press_timer.borrow_mut() = Some(Timeout::new(LONG_PRESS_MS, move || {
                        labelled.set(Some(section));
                    }));
                })
            };

            let ontouchend = {
                let labelled = labelled.clone();
                let press_timer = press_timer.clone();
                Callback::from(move |_: TouchEvent| {
                    press_timer.borrow_mut().take();
                    labelled.set(None);
                })
            };

            html! {
                <li key={section.id()}>
                    <button
                        type="button"
                        class={classes!("nav-item", is_active.then_some("active"))}
                        data-class={INTERACTIVE_MARKER}
                        aria-label={section.title()}
                        aria-current={is_active.then_some("true")}
                        onclick={onclick}
                        ontouchstart={ontouchstart}
                        ontouchend={ontouchend.clone()}
                        ontouchcancel={ontouchend}
                    >
                        <span class="nav-glyph" aria-hidden="true">{section.glyph()}</span>
                        <span class={classes!("nav-label", (*labelled == Some(section)).then_some("is-visible"))}>
                            {section.title()}
                        </span>
                    </button>
                </li>
            }
        })
        .collect::<Html>();

    let open = props.sidebar.is_open();
    let toggle = props.sidebar.toggle().map(|toggle| {
        html! {
            <button
                class="nav-toggle"
                type="button"
                data-class={INTERACTIVE_MARKER}
                aria-label={toggle.label}
                aria-expanded={open.to_string()}
                onclick={on_toggle}
            >
                <span aria-hidden="true">{toggle.glyph}</span>
            </button>
        }
    });

    html! {
        <nav class={classes!("side-nav", open.then_some("open"))} aria-label="Sections">
            {toggle}
            <ul class="nav-list">{items}</ul>
        </nav>
    }
}

#[derive(Properties, PartialEq)]
struct ExternalLinkProps {
    href: AttrValue,
    label: AttrValue,
}

#[function_component(ExternalLink)]
fn external_link(props: &ExternalLinkProps) -> Html {
    html! {
        <a
            class="link"
            href={props.href.clone()}
            target="_blank"
            rel="noopener noreferrer"
            data-class={INTERACTIVE_MARKER}
        >
            {props.label.clone()}
            <span class="external-mark" aria-hidden="true">{"↗"}</span>
            <span class="sr-only">{" (opens in a new tab)"}</span>
        </a>
    }
}

fn heading_id(section: Section) -> String {
    format!("{}-heading", section.id())
}

fn hero_section() -> Html {
    let profile = &RESUME.profile;
    let contacts = RESUME
        .contacts
        .iter()
        .map(|contact| {
            html! {
                <a
                    class="contact-button"
                    href={contact.href}
                    target="_blank"
                    rel="noopener noreferrer"
                    data-class={INTERACTIVE_MARKER}
                    aria-label={contact.label}
                >
                    <span aria-hidden="true">{contact.glyph}</span>
                </a>
            }
        })
        .collect::<Html>();

    html! {
        <section id={Section::Hero.id()} class="section-block hero" aria-labelledby={heading_id(Section::Hero)}>
            <img class="avatar" src={profile.avatar} alt={profile.name} />
            <h1 id={heading_id(Section::Hero)}>{profile.name}</h1>
            <p class="headline">{profile.headline}</p>
            <div class="contact-row">{contacts}</div>
        </section>
    }
}

fn about_section() -> Html {
    html! {
        <section id={Section::About.id()} class="section-block" aria-labelledby={heading_id(Section::About)}>
            <h2 id={heading_id(Section::About)}>{Section::About.title()}</h2>
            { for RESUME.profile.summary.iter().map(|paragraph| html! { <p>{*paragraph}</p> }) }
        </section>
    }
}

fn experience_section() -> Html {
    let entries = RESUME
        .experiences
        .iter()
        .map(|experience| {
            html! {
                <article class="timeline-entry">
                    <h3>{experience.title}</h3>
                    <p class="muted">
                        {format!("{} · {} · {}", experience.company, experience.period, experience.location)}
                    </p>
                    <ul>
                        { for experience.responsibilities.iter().map(|item| html! { <li>{*item}</li> }) }
                    </ul>
                </article>
            }
        })
        .collect::<Html>();

    html! {
        <section id={Section::Experience.id()} class="section-block" aria-labelledby={heading_id(Section::Experience)}>
            <h2 id={heading_id(Section::Experience)}>{Section::Experience.title()}</h2>
            {entries}
        </section>
    }
}

fn skills_section() -> Html {
    html! {
        <section id={Section::Skills.id()} class="section-block" aria-labelledby={heading_id(Section::Skills)}>
            <h2 id={heading_id(Section::Skills)}>{Section::Skills.title()}</h2>
            <ul class="chip-list">
                { for RESUME.skills.iter().map(|skill| html! { <li class="chip">{*skill}</li> }) }
            </ul>
        </section>
    }
}

fn projects_section() -> Html {
    let entries = RESUME
        .projects
        .iter()
        .map(|project| {
            let title = match project.link {
                Some(link) => html! { <ExternalLink href={link} label={project.title} /> },
                None => html! { <>{project.title}</> },
            };
            html! {
                <li>
                    <h3>{title}</h3>
                    <p class="muted">{project.description}</p>
                </li>
            }
        })
        .collect::<Html>();

    html! {
        <section id={Section::Projects.id()} class="section-block" aria-labelledby={heading_id(Section::Projects)}>
            <h2 id={heading_id(Section::Projects)}>{Section::Projects.title()}</h2>
            <ul class="row-list">{entries}</ul>
        </section>
    }
}

fn certificates_section() -> Html {
    let entries = RESUME
        .certificates
        .iter()
        .map(|certificate| match certificate.link {
            Some(link) => html! { <li><ExternalLink href={link} label={certificate.title} /></li> },
            None => html! { <li>{certificate.title}</li> },
        })
        .collect::<Html>();

    html! {
        <section id={Section::Certificates.id()} class="section-block" aria-labelledby={heading_id(Section::Certificates)}>
            <h2 id={heading_id(Section::Certificates)}>{Section::Certificates.title()}</h2>
            <ul class="row-list">{entries}</ul>
        </section>
    }
}

fn education_section() -> Html {
    let entries = RESUME
        .education
        .iter()
        .map(|education| {
            html! {
                <article class="timeline-entry">
                    <h3>{education.degree}</h3>
                    <p class="muted">{format!("{} · {}", education.school, education.period)}</p>
                    <p>{education.grade}</p>
                </article>
            }
        })
        .collect::<Html>();

    html! {
        <section id={Section::Education.id()} class="section-block" aria-labelledby={heading_id(Section::Education)}>
            <h2 id={heading_id(Section::Education)}>{Section::Education.title()}</h2>
            {entries}
        </section>
    }
}

fn register_sections(spy: &mut ScrollSpy<Section>) {
    for section in Section::ALL {
        match section_top(section) {
            Some(top) => spy.register(section, top),
            None => spy.unregister(section),
        }
    }
}

fn track_scroll(
    spy: &RefCell<Option<ScrollSpy<Section>>>,
    active: &UseStateHandle<Section>,
    progress: &UseStateHandle<f64>,
) {
    let (_, viewport_height) = viewport_size();
    let offset = scroll_offset();

    if let Some(spy) = spy.borrow_mut().as_mut() {
        register_sections(spy);
        if spy.on_scroll(offset, viewport_height) {
            active.set(spy.active());
        }
    }
    progress.set(scroll_progress(offset, document_height(), viewport_height));
}

#[function_component(App)]
fn app() -> Html {
    let backdrop = use_state(resolve_backdrop);
    let mobile = use_state_eq(|| is_mobile(viewport_size().0));
    let reduced_motion = use_state(prefers_reduced_motion);
    let active = use_state_eq(|| Section::ALL[0]);
    let progress = use_state_eq(|| 0.0_f64);
    let sidebar = use_state_eq(|| Sidebar::new(*mobile));
    let spy = use_mut_ref(|| ScrollSpy::new(&Section::ALL));

    {
        let mounted_backdrop = *backdrop;
        let mounted_mobile = *mobile;
        let reduced_motion = *reduced_motion;
        let mobile = mobile.clone();
        let active = active.clone();
        let progress = progress.clone();
        let spy = spy.clone();
        use_effect_with((), move |_| {
            log_event(
                LOG_LEVEL,
                LogLevel::Info,
                "app_mounted",
                json!({
                    "backdrop": mounted_backdrop.as_str(),
                    "mobile": mounted_mobile,
                    "reducedMotion": reduced_motion,
                }),
            );

            let mut subscriptions = Subscriptions::new();
            if let Some(win) = window() {
                track_scroll(&spy, &active, &progress);
                {
                    let spy = spy.clone();
                    let active = active.clone();
                    let progress = progress.clone();
                    subscriptions.hold(EventListener::new(&win, "scroll", move |_| {
                        track_scroll(&spy, &active, &progress);
                    }));
                }
                subscriptions.hold(EventListener::new(&win, "resize", move |_| {
                    mobile.set(is_mobile(viewport_size().0));
                    track_scroll(&spy, &active, &progress);
                }));
            }

            move || {
                subscriptions.teardown();
            }
        });
    }

    let on_toggle_backdrop = {
        let backdrop = backdrop.clone();
        Callback::from(move |_: MouseEvent| {
            let current = *backdrop;
            let next = current.next();
            persist_backdrop(next);
            log_event(
                LOG_LEVEL,
                LogLevel::Info,
                "backdrop_changed",
                json!({ "from": current.as_str(), "to": next.as_str() }),
            );
            backdrop.set(next);
        })
    };

    {
        let sidebar = sidebar.clone();
        use_effect_with(*mobile, move |&mobile| {
            sidebar.set((*sidebar).resized(mobile));
        });
    }

    let on_navigate = {
        let spy = spy.clone();
        let sidebar = sidebar.clone();
        Callback::from(move |section: Section| {
            let target = spy.borrow_mut().as_mut().and_then(|spy| {
                register_sections(spy);
                spy.navigate_target(section)
            });
            if let Some(top) = target {
                scroll_to(top);
            }
            sidebar.set((*sidebar).navigated());
        })
    };

    let on_toggle_sidebar = {
        let sidebar = sidebar.clone();
        Callback::from(move |_: ()| sidebar.set((*sidebar).toggled()))
    };

    let progress_style = format!("transform: scaleX({:.4});", *progress);

    html! {
        <>
            <a class="skip-link" href="#content">{"Skip to main content"}</a>
            <BackdropCanvas backdrop={*backdrop} mobile={*mobile} reduced_motion={*reduced_motion} />
            if !*mobile {
                <CustomCursor />
            }
            <div class="scroll-progress" style={progress_style} aria-hidden="true" />
            <header class="site-header">
                <button
                    class="backdrop-toggle"
                    type="button"
                    data-class={INTERACTIVE_MARKER}
                    aria-label={(*backdrop).toggle_label()}
                    onclick={on_toggle_backdrop}
                >
                    <span aria-hidden="true">{(*backdrop).icon()}</span>
                </button>
            </header>
            <SideNav
                active={*active}
                sidebar={*sidebar}
                on_navigate={on_navigate}
                on_toggle={on_toggle_sidebar}
            />
            <main id="content" class="page-shell">
                {hero_section()}
                {about_section()}
                {experience_section()}
                {skills_section()}
                {projects_section()}
                {certificates_section()}
                {education_section()}
            </main>
        </>
    }
}

pub fn run() {
    let root = window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id("app"));

    match root {
        Some(root) => {
            yew::Renderer::<App>::with_root(root).render();
        }
        None => log_event(
            LOG_LEVEL,
            LogLevel::Warn,
            "mount_point_missing",
            json!({ "id": "app" }),
        ),
    }
}
