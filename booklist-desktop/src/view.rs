//! iced widgets for the core render models.

use booklist_core::{
    ActionButton, Cover, DescriptionSection, EntryDisplay, EntryMessage, EntryRender, FormField,
    FormMessage, FormRender, ListMessage, ListRender,
};
use iced::widget::{
    button, column, container, image, row, scrollable, text, text_input, tooltip, Column, Row,
    Space,
};
use iced::{Alignment, Element, Length};

const COVER_WIDTH: f32 = 100.0;
const COVER_HEIGHT: f32 = 150.0;

/// Builds the collection view. `cover_for(book_id, url)` returns a loaded
/// cover, if there is one.
pub fn book_list<'a>(
    render: ListRender,
    cover_for: impl Fn(&str, &str) -> Option<image::Handle>,
) -> Element<'a, ListMessage> {
    let add = tooltip(
        button(text(render.add_label)).on_press(ListMessage::AddBook),
        text(render.add_accessible_label),
        tooltip::Position::Bottom,
    );
    let header = row![text(render.header).size(26), Space::with_width(Length::Fill), add]
        .align_y(Alignment::Center);

    let mut items = Column::new().spacing(12);
    for (id, entry) in render.entries {
        let cover = match &entry {
            EntryRender::Display(EntryDisplay {
                cover: Cover::Image { url, .. },
                ..
            }) => cover_for(&id, url),
            _ => None,
        };
        items = items.push(
            book_entry(entry, cover).map(move |message| ListMessage::Entry {
                id: id.clone(),
                message,
            }),
        );
    }
    if let Some(message) = render.empty_message {
        items = items.push(text(message).size(16));
    }

    scrollable(column![header, items].spacing(20).padding(20)).into()
}

fn book_entry<'a>(render: EntryRender, cover: Option<image::Handle>) -> Element<'a, EntryMessage> {
    let content = match render {
        EntryRender::Display(display) => entry_display(display, cover),
        EntryRender::Editing(form) => edit_form(form).map(EntryMessage::Form),
    };
    container(content)
        .padding(12)
        .width(Length::Fill)
        .style(container::rounded_box)
        .into()
}

fn entry_display<'a>(display: EntryDisplay, cover: Option<image::Handle>) -> Element<'a, EntryMessage> {
    // A cover that is still loading shows its alt text, like a browser would.
    let cover_slot: Element<'a, EntryMessage> = match (display.cover, cover) {
        (Cover::Image { .. }, Some(handle)) => image(handle)
            .width(Length::Fixed(COVER_WIDTH))
            .height(Length::Fixed(COVER_HEIGHT))
            .into(),
        (Cover::Image { alt, .. }, None) => cover_box(alt),
        (Cover::Placeholder { label }, _) => cover_box(label),
    };

    let mut actions = Row::new().spacing(6);
    if let Some(edit) = display.edit {
        actions = actions.push(action_button("Edit", edit, EntryMessage::Edit));
    }
    if let Some(delete) = display.delete {
        actions = actions.push(action_button("Delete", delete, EntryMessage::Delete));
    }
    let heading = row![text(display.title).size(20).width(Length::Fill), actions]
        .align_y(Alignment::Center);

    let description: Element<'a, EntryMessage> = match display.description {
        DescriptionSection::Toggle { label, text: body, .. } => {
            let mut section = Column::new()
                .spacing(6)
                .push(button(text(label)).on_press(EntryMessage::ToggleDescription));
            if let Some(body) = body {
                section = section.push(text(body));
            }
            section.into()
        }
        DescriptionSection::Missing { message } => text(message).size(14).into(),
    };

    row![
        cover_slot,
        column![heading, description].spacing(8).width(Length::Fill)
    ]
    .spacing(16)
    .into()
}

fn cover_box<'a>(label: String) -> Element<'a, EntryMessage> {
    container(text(label).size(12))
        .padding(8)
        .center_x(Length::Fixed(COVER_WIDTH))
        .center_y(Length::Fixed(COVER_HEIGHT))
        .style(container::bordered_box)
        .into()
}

fn action_button<'a>(
    caption: &'static str,
    action: ActionButton,
    message: EntryMessage,
) -> Element<'a, EntryMessage> {
    tooltip(
        button(text(caption)).on_press(message),
        text(action.tooltip),
        tooltip::Position::Top,
    )
    .into()
}

fn edit_form<'a>(form: FormRender) -> Element<'a, FormMessage> {
    let save = button(text(form.save_label))
        .on_press_maybe(form.save_enabled.then_some(FormMessage::Submit));
    let cancel = button(text(form.cancel_label)).on_press(FormMessage::Cancel);

    column![
        labelled_input(form.title, FormMessage::TitleChanged),
        labelled_input(form.description, FormMessage::DescriptionChanged),
        labelled_input(form.image_url, FormMessage::ImageUrlChanged),
        row![cancel, save].spacing(8),
    ]
    .spacing(10)
    .into()
}

fn labelled_input<'a>(field: FormField, on_input: fn(String) -> FormMessage) -> Element<'a, FormMessage> {
    let input = text_input(field.placeholder.unwrap_or_default(), &field.value)
        .id(text_input::Id::new(field.id))
        .on_input(on_input)
        .on_submit(FormMessage::Submit)
        .padding(6);

    column![text(field.label).size(14), input].spacing(4).into()
}
