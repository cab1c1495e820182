use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use crate::catalog::{Card, CatalogView};
use crate::menu::{hit_map::HitTarget, state::MenuState};

/// Columns taken by the thumbnail block of a card.
pub const THUMB_WIDTH: u16 = 8;
const CARD_GAP: u16 = 1;
const CLOSE_LABEL: &str = " [x] ";

pub trait MenuRenderer {
    fn draw(&mut self, frame: &mut Frame, state: &mut MenuState);
}

pub struct DefaultMenuRenderer {
    pub show_help_hint: bool,
}

impl Default for DefaultMenuRenderer {
    fn default() -> Self {
        Self {
            show_help_hint: true,
        }
    }
}

impl MenuRenderer for DefaultMenuRenderer {
    fn draw(&mut self, frame: &mut Frame, state: &mut MenuState) {
        state.hit_map.clear();

        let hint_height = if self.show_help_hint { 1 } else { 0 };
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // search
                Constraint::Length(3), // category strip
                Constraint::Min(3),
                Constraint::Length(hint_height),
            ])
            .split(frame.area());

        frame.render_widget(&state.search_input, chunks[0]);
        draw_category_strip(frame, chunks[1], state);
        draw_catalog(frame, chunks[2], state);

        if self.show_help_hint {
            let help_hint = Paragraph::new(
                "←/→: Categoria | ↑/↓: Item | Enter: Foto | C-h: Ajuda | Esc: Sair",
            )
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray));
            frame.render_widget(help_hint, chunks[3]);
        }

        if state.show_help {
            draw_help_popup(frame);
        }

        if state.modal().is_open() {
            draw_image_modal(frame, state);
        }
    }
}

fn draw_category_strip(frame: &mut Frame, area: Rect, state: &mut MenuState) {
    let title = if state.shown_search().is_some() {
        "Categorias (busca ativa)"
    } else {
        "Categorias"
    };
    let block = Block::default().borders(Borders::ALL).title(title);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    state.resize_strip(inner.width);
    let strip = state.strip();
    let scroll = strip.scroll();

    let mut spans = Vec::with_capacity(strip.len() * 2);
    for (idx, name) in strip.pills().iter().enumerate() {
        if idx > 0 {
            spans.push(Span::raw(" "));
        }
        let style = if strip.is_active(idx) {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White).bg(Color::DarkGray)
        };
        spans.push(Span::styled(format!(" {name} "), style));
    }

    let pills: Vec<(usize, Rect)> = (0..strip.len())
        .filter_map(|idx| {
            visible_pill_area(
                inner,
                strip.pill_left(idx),
                strip.pill_width(idx),
                scroll,
            )
            .map(|rect| (idx, rect))
        })
        .collect();

    frame.render_widget(
        Paragraph::new(Line::from(spans)).scroll((0, scroll)),
        inner,
    );

    for (idx, rect) in pills {
        state.hit_map.register(rect, HitTarget::CategoryPill(idx));
    }
}

/// Screen area of a pill after horizontal scrolling, clipped to `inner`.
fn visible_pill_area(
    inner: Rect,
    left: u16,
    width: u16,
    scroll: u16,
) -> Option<Rect> {
    let start = i32::from(left) - i32::from(scroll);
    let end = start + i32::from(width);
    let clipped_start = start.max(0);
    let clipped_end = end.min(i32::from(inner.width));

    if clipped_end <= clipped_start || inner.height == 0 {
        return None;
    }

    Some(Rect {
        x: inner.x + clipped_start as u16,
        y: inner.y,
        width: (clipped_end - clipped_start) as u16,
        height: 1,
    })
}

fn card_height(card: &Card) -> u16 {
    if card.description.is_some() { 3 } else { 2 }
}

fn draw_catalog(frame: &mut Frame, area: Rect, state: &mut MenuState) {
    let title = match state.shown_search() {
        Some(term) => format!("Resultados para \"{term}\""),
        None => state.current_category().unwrap_or("Cardápio").to_string(),
    };
    let block = Block::default().borders(Borders::ALL).title(title);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let cards = match state.view() {
        CatalogView::Empty(message) => {
            let [line] = Layout::vertical([Constraint::Length(1)])
                .flex(Flex::Center)
                .areas(inner);
            frame.render_widget(
                Paragraph::new(message.as_str())
                    .alignment(Alignment::Center)
                    .style(Style::default().fg(Color::DarkGray)),
                line,
            );
            return;
        }
        CatalogView::Cards(cards) => cards.clone(),
    };

    let selected = state.list_state.selected().unwrap_or(0);
    let offset = scroll_offset(
        &cards,
        selected,
        state.list_state.offset(),
        inner.height,
    );
    *state.list_state.offset_mut() = offset;

    let revealed = state.revealed_cards();
    let bottom = inner.y + inner.height;
    let mut y = inner.y;

    for (idx, card) in cards.iter().enumerate().skip(offset).take(
        revealed.saturating_sub(offset),
    ) {
        if y >= bottom {
            break;
        }

        let height = card_height(card).min(bottom - y);
        let card_area = Rect {
            x: inner.x,
            y,
            width: inner.width,
            height,
        };
        if let Some(thumb) = draw_card(frame, card_area, card, idx == selected) {
            state.hit_map.register(thumb, HitTarget::Thumbnail(idx));
        }

        y = y.saturating_add(card_height(card) + CARD_GAP);
    }
}

/// First card index to draw so that `selected` stays visible.
fn scroll_offset(
    cards: &[Card],
    selected: usize,
    current: usize,
    height: u16,
) -> usize {
    let mut offset = current.min(selected);
    let span = |from: usize| -> u16 {
        cards[from..=selected]
            .iter()
            .map(|c| card_height(c) + CARD_GAP)
            .sum::<u16>()
            .saturating_sub(CARD_GAP)
    };

    while offset < selected && span(offset) > height {
        offset += 1;
    }
    offset
}

/// Draws one card and returns the thumbnail area when it is clickable.
fn draw_card(
    frame: &mut Frame,
    area: Rect,
    card: &Card,
    selected: bool,
) -> Option<Rect> {
    let [thumb_area, _, info_area] = Layout::horizontal([
        Constraint::Length(THUMB_WIDTH),
        Constraint::Length(1),
        Constraint::Min(1),
    ])
    .areas(area);

    let thumb = if card.image.is_some() {
        Paragraph::new(vec![Line::from(" [foto] "), Line::from("  ver   ")])
            .style(Style::default().fg(Color::White).bg(Color::Blue))
    } else {
        Paragraph::new(vec![Line::from("        "), Line::from("        ")])
            .style(Style::default().bg(Color::DarkGray))
    };
    frame.render_widget(thumb, thumb_area);

    let mut name_style = Style::default().add_modifier(Modifier::BOLD);
    if selected {
        name_style = name_style.add_modifier(Modifier::REVERSED);
    }

    let mut lines = vec![Line::from(Span::styled(card.name.as_str(), name_style))];
    if let Some(description) = &card.description {
        lines.push(Line::from(Span::styled(
            description.as_str(),
            Style::default().fg(Color::Gray),
        )));
    }
    lines.push(Line::from(Span::styled(
        card.price.as_str(),
        Style::default().fg(Color::Green),
    )));
    frame.render_widget(Paragraph::new(lines), info_area);

    card.image.as_ref().map(|_| thumb_area)
}

fn draw_image_modal(frame: &mut Frame, state: &mut MenuState) {
    let area = frame.area();
    let (Some(source), Some(caption)) =
        (state.modal().source(), state.modal().caption())
    else {
        return;
    };

    // backdrop dims everything drawn so far
    frame.render_widget(
        Block::default().style(Style::default().fg(Color::DarkGray)),
        area,
    );

    let popup_area =
        create_centered_rect(area, area.width.min(60), area.height.min(9));
    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .title(caption.to_string())
        .title_top(Line::from(CLOSE_LABEL).right_aligned())
        .borders(Borders::ALL)
        .style(Style::default().bg(Color::Black).fg(Color::White));

    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Imagem",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(source.to_string()),
        Line::from(""),
        Line::from(Span::styled(
            "Esc ou clique fora para fechar",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    frame.render_widget(
        Paragraph::new(content)
            .block(block)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        popup_area,
    );

    let close_width = CLOSE_LABEL.len() as u16;
    let close_area = Rect {
        x: (popup_area.x + popup_area.width)
            .saturating_sub(1 + close_width)
            .max(popup_area.x),
        y: popup_area.y,
        width: close_width.min(popup_area.width),
        height: 1.min(popup_area.height),
    };

    state.hit_map.register(area, HitTarget::ModalBackdrop);
    state.hit_map.register(popup_area, HitTarget::ModalBody);
    state.hit_map.register(close_area, HitTarget::ModalClose);
}

fn draw_help_popup(f: &mut Frame) {
    let popup_area = create_centered_rect(f.area(), 60, 9);

    f.render_widget(Clear, popup_area);

    let navigation_block = Block::default()
        .title("Navegação")
        .borders(Borders::ALL)
        .style(Style::default().bg(Color::DarkGray));

    let search_block = Block::default()
        .title("Busca e foto")
        .borders(Borders::ALL)
        .style(Style::default().bg(Color::DarkGray));

    let navigation_text = vec![
        Line::from("←/→/Tab → Categoria"),
        Line::from("↑/C-p   → Item anterior"),
        Line::from("↓/C-n   → Próximo item"),
        Line::from("Esc/C-c → Sair"),
    ];

    let search_text = vec![
        Line::from("texto → Filtrar"),
        Line::from("C-w   → Apagar palavra"),
        Line::from("C-u   → Limpar busca"),
        Line::from("Enter → Ver foto"),
    ];

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(popup_area);

    f.render_widget(
        Paragraph::new(navigation_text).block(navigation_block),
        chunks[0],
    );
    f.render_widget(Paragraph::new(search_text).block(search_block), chunks[1]);
}

fn create_centered_rect(area: Rect, length_x: u16, length_y: u16) -> Rect {
    let vertical =
        Layout::vertical([Constraint::Length(length_y)]).flex(Flex::Center);
    let horizontal =
        Layout::horizontal([Constraint::Length(length_x)]).flex(Flex::Center);
    let [area] = vertical.areas(area);
    let [area] = horizontal.areas(area);
    area
}
