//! Terminal UI rendering using ratatui.
//!
//! Draws the header bar, the category selector and search input, the
//! paginated product table (or the loading/error/empty states that take
//! its place), the pagination footer, and the transient toast overlay.
//! Rendering is a pure function of [`AppState`]; no state is mutated here.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{
    Block, Borders, Cell, Clear, Paragraph, Row, Table, TableState, Tabs,
};

use crate::logic::{ITEMS_PER_PAGE, paginate};
use crate::state::{AppState, CatalogError, Focus};
use crate::util::{capitalize_first, format_price, format_rating, truncate};

/// Draw one full frame from the current application state.
pub fn render(f: &mut Frame, app: &AppState) {
    let area = f.area();
    f.render_widget(
        Block::default().style(Style::default().bg(app.theme.background)),
        area,
    );

    let [header, controls, main, footer] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(3),
        Constraint::Min(1),
        Constraint::Length(1),
    ])
    .areas(area);

    render_header(f, app, header);
    render_controls(f, app, controls);
    render_main(f, app, main);
    render_footer(f, app, footer);
    render_toast(f, app, area);
}

fn render_header(f: &mut Frame, app: &AppState, area: Rect) {
    let bar = Style::default()
        .bg(app.theme.accent)
        .fg(app.theme.highlight_fg);
    f.render_widget(Block::default().style(bar), area);
    f.render_widget(
        Paragraph::new(" Shopsea — Product Lookup").style(bar.add_modifier(Modifier::BOLD)),
        area,
    );
    f.render_widget(
        Paragraph::new("Ctrl+T theme · Tab focus · Esc quit ")
            .alignment(Alignment::Right)
            .style(bar),
        area,
    );
}

fn render_controls(f: &mut Frame, app: &AppState, area: Rect) {
    let [cats, search] = Layout::horizontal([Constraint::Min(30), Constraint::Length(42)])
        .areas(area);

    let titles: Vec<Line> = app
        .categories
        .iter()
        .map(|c| {
            let label = capitalize_first(c);
            if *c == app.selected_category {
                Line::from(Span::styled(
                    label,
                    Style::default()
                        .fg(app.theme.secondary)
                        .add_modifier(Modifier::BOLD),
                ))
            } else {
                Line::from(Span::styled(label, Style::default().fg(app.theme.text)))
            }
        })
        .collect();
    let tabs = Tabs::new(titles)
        .select(app.category_cursor)
        .divider("|")
        .highlight_style(
            Style::default()
                .bg(app.theme.accent)
                .fg(app.theme.highlight_fg),
        )
        .block(pane_block(app, "Category", app.focus == Focus::Categories));
    f.render_widget(tabs, cats);

    let input_line = if app.input.is_empty() && app.focus != Focus::Search {
        Line::from(Span::styled(
            "Search for a product",
            Style::default().fg(app.theme.dim),
        ))
    } else {
        let mut spans = vec![Span::styled(
            app.input.clone(),
            Style::default().fg(app.theme.text),
        )];
        if app.focus == Focus::Search {
            spans.push(Span::styled("█", Style::default().fg(app.theme.accent)));
        }
        Line::from(spans)
    };
    let search_box = Paragraph::new(input_line)
        .block(pane_block(app, "Search", app.focus == Focus::Search));
    f.render_widget(search_box, search);
}

fn render_main(f: &mut Frame, app: &AppState, area: Rect) {
    if app.loading {
        f.render_widget(
            Paragraph::new("Loading products…")
                .alignment(Alignment::Center)
                .style(Style::default().fg(app.theme.secondary)),
            vertical_center(area),
        );
        return;
    }
    if app.error == Some(CatalogError::FetchFailed) {
        f.render_widget(
            Paragraph::new(CatalogError::FetchFailed.message())
                .alignment(Alignment::Center)
                .style(
                    Style::default()
                        .fg(app.theme.error)
                        .add_modifier(Modifier::BOLD),
                ),
            vertical_center(area),
        );
        return;
    }
    if app.filtered.is_empty() {
        // Reached either through a zero-match search or an empty category.
        f.render_widget(
            Paragraph::new(format!("⌕  {}", CatalogError::NoMatches.message()))
                .alignment(Alignment::Center)
                .style(
                    Style::default()
                        .fg(app.theme.error)
                        .add_modifier(Modifier::BOLD),
                ),
            vertical_center(area),
        );
        return;
    }

    let (page, _) = paginate(&app.filtered, app.current_page, ITEMS_PER_PAGE);
    let title_width = area.width.saturating_sub(46).max(20) as usize;
    let rows: Vec<Row> = page
        .iter()
        .map(|p| {
            Row::new(vec![
                Cell::from(truncate(&p.title, title_width)),
                Cell::from(format_price(p.price))
                    .style(Style::default().fg(app.theme.secondary)),
                Cell::from(capitalize_first(&p.category)),
                Cell::from(format_rating(p.rating.rate, p.rating.count)),
            ])
        })
        .collect();
    let table = Table::new(
        rows,
        [
            Constraint::Min(20),
            Constraint::Length(10),
            Constraint::Length(18),
            Constraint::Length(12),
        ],
    )
    .header(
        Row::new(vec!["Title", "Price", "Category", "Rating"]).style(
            Style::default()
                .fg(app.theme.accent)
                .add_modifier(Modifier::BOLD),
        ),
    )
    .style(Style::default().fg(app.theme.text))
    .row_highlight_style(
        Style::default()
            .bg(app.theme.accent)
            .fg(app.theme.highlight_fg),
    )
    .block(pane_block(app, "Products", app.focus == Focus::Results));
    let mut state = TableState::default();
    if app.focus == Focus::Results {
        state.select(Some(app.selected_row.min(page.len().saturating_sub(1))));
    }
    f.render_stateful_widget(table, area, &mut state);
}

fn render_footer(f: &mut Frame, app: &AppState, area: Rect) {
    if !app.filtered.is_empty() {
        let (_, count) = paginate(&app.filtered, app.current_page, ITEMS_PER_PAGE);
        let text = format!(
            " Page {}/{} · {} products · ←/→ or PgUp/PgDn to flip",
            app.current_page,
            count,
            app.filtered.len()
        );
        f.render_widget(
            Paragraph::new(text).style(Style::default().fg(app.theme.dim)),
            area,
        );
    }
    if let Some(status) = &app.status_text {
        f.render_widget(
            Paragraph::new(format!("{status} "))
                .alignment(Alignment::Right)
                .style(Style::default().fg(app.theme.dim)),
            area,
        );
    }
}

fn render_toast(f: &mut Frame, app: &AppState, area: Rect) {
    let Some(message) = &app.toast_message else {
        return;
    };
    let width = (message.chars().count() as u16 + 4).min(area.width);
    let height = 3.min(area.height);
    let rect = Rect {
        x: area.right().saturating_sub(width + 1),
        y: area.bottom().saturating_sub(height + 1),
        width,
        height,
    };
    f.render_widget(Clear, rect);
    f.render_widget(
        Paragraph::new(message.as_str())
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .style(Style::default().bg(app.theme.surface).fg(app.theme.secondary)),
            ),
        rect,
    );
}

/// Bordered block for a pane, with the border highlighted when focused.
fn pane_block<'a>(app: &AppState, title: &'a str, focused: bool) -> Block<'a> {
    let border = if focused {
        Style::default().fg(app.theme.accent)
    } else {
        Style::default().fg(app.theme.dim)
    };
    Block::default()
        .borders(Borders::ALL)
        .border_style(border)
        .title(Span::styled(title, border))
        .style(Style::default().bg(app.theme.surface))
}

/// One-line rect vertically centered within `area`, for short messages.
fn vertical_center(area: Rect) -> Rect {
    let y = area.y + area.height / 2;
    Rect {
        x: area.x,
        y: y.min(area.bottom().saturating_sub(1)),
        width: area.width,
        height: 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic;
    use crate::state::{FetchEvent, Product, Rating};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn draw(app: &AppState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| render(f, app)).unwrap();
        let buffer = terminal.backend().buffer().clone();
        let mut out = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    fn product(id: u64, title: &str, category: &str) -> Product {
        Product {
            id,
            title: title.to_string(),
            price: 12.5,
            category: category.to_string(),
            image: String::new(),
            rating: Rating {
                rate: 4.2,
                count: 37,
            },
        }
    }

    #[test]
    /// What: The startup frame shows the loading indicator, not the grid.
    fn loading_frame() {
        let app = AppState::default();
        let text = draw(&app);
        assert!(text.contains("Loading products…"));
        assert!(!text.contains("Page 1/"));
    }

    #[test]
    /// What: A failed products fetch replaces the grid with the fatal error.
    fn fetch_error_frame() {
        let mut app = AppState::default();
        logic::apply_fetch(&mut app, FetchEvent::Products(Err("boom".to_string())));
        let text = draw(&app);
        assert!(text.contains("Failed to fetch product data."));
        assert!(!text.contains("Loading products…"));
        assert!(!text.contains("Page 1/"), "pagination hidden with no products");
    }

    #[test]
    /// What: A populated catalog renders rows, formatted fields, and paging.
    fn product_table_frame() {
        let mut app = AppState::default();
        logic::apply_fetch(
            &mut app,
            FetchEvent::Products(Ok(vec![
                product(1, "USB Hub", "electronics"),
                product(2, "Gold Ring", "jewelery"),
            ])),
        );
        let text = draw(&app);
        assert!(text.contains("USB Hub"));
        assert!(text.contains("$12.50"));
        assert!(text.contains("4.2 (37)"));
        assert!(text.contains("Electronics"), "category is capitalized");
        assert!(text.contains("Page 1/1 · 2 products"));
    }

    #[test]
    /// What: A zero-match search renders the inline empty panel.
    fn no_matches_frame() {
        let mut app = AppState::default();
        logic::apply_fetch(
            &mut app,
            FetchEvent::Products(Ok(vec![product(1, "USB Hub", "electronics")])),
        );
        logic::set_query(&mut app, "xyz".to_string());
        logic::commit_search(&mut app);
        let text = draw(&app);
        assert!(text.contains("No products found."));
        assert!(!text.contains("USB Hub"));
    }

    #[test]
    /// What: The toast overlay and the footer diagnostic are both drawn.
    fn toast_and_status_frame() {
        let mut app = AppState::default();
        logic::apply_fetch(
            &mut app,
            FetchEvent::Products(Ok(vec![product(1, "USB Hub", "electronics")])),
        );
        logic::apply_fetch(
            &mut app,
            FetchEvent::Categories(Err("exit status: 22".to_string())),
        );
        logic::card_interaction(&mut app);
        let text = draw(&app);
        assert!(text.contains("Coming Soon!"));
        assert!(text.contains("categories unavailable"));
    }
}
