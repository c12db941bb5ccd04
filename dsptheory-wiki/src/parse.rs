//! Extraction of [`Item`] records from dsp-wiki.com page markup.
//!
//! The wiki renders an item's crafting panel as a `.pc_table` whose rows hold
//! a `.tt_recipe` cell: `.tt_recipe_item` children are inputs,
//! `.tt_output_item` children are outputs, and the `.tt_rec_arrow` div text
//! is the duration. Input quantities are sometimes omitted entirely, so they
//! parse leniently; output quantities are always printed for craftable items
//! and a missing one means the page changed shape under us.

use scraper::{ElementRef, Html, Selector};

use dsptheory_lib::entities::{Item, ItemId, ItemList, ItemQuantity, Recipe};

use crate::error::FetchError;

fn selector(css: &'static str) -> Selector {
    Selector::parse(css).expect("static selector")
}

fn text_of(el: ElementRef<'_>) -> String {
    el.text().collect::<String>().trim().to_string()
}

/// Wiki hrefs are absolute paths (`/Iron_Ingot`); item ids drop the slash.
fn href_to_id(el: ElementRef<'_>, context: &'static str) -> Result<ItemId, FetchError> {
    let link = selector("a");
    let href = el
        .select(&link)
        .next()
        .and_then(|a| a.value().attr("href"))
        .ok_or(FetchError::MissingElement(context))?;
    Ok(ItemId::new(href.strip_prefix('/').unwrap_or(href)))
}

fn quantity_text(el: ElementRef<'_>) -> Option<String> {
    let div = selector("div");
    el.select(&div).next().map(text_of)
}

fn parse_recipe(cell: ElementRef<'_>) -> Result<Recipe, FetchError> {
    let input_sel = selector(".tt_recipe_item");
    let output_sel = selector(".tt_output_item");
    let arrow_sel = selector(".tt_rec_arrow div");

    let mut input = Vec::new();
    for entry in cell.select(&input_sel) {
        let id = href_to_id(entry, "tt_recipe_item link")?;
        let quantity = quantity_text(entry).and_then(|text| text.parse::<ItemQuantity>().ok());
        input.push((id, quantity));
    }

    let mut output = Vec::new();
    for entry in cell.select(&output_sel) {
        let id = href_to_id(entry, "tt_output_item link")?;
        let text = quantity_text(entry).ok_or(FetchError::MissingElement("output quantity"))?;
        let quantity = text
            .parse::<ItemQuantity>()
            .map_err(|_| FetchError::BadQuantity(text))?;
        output.push((id, Some(quantity)));
    }

    let duration = cell
        .select(&arrow_sel)
        .next()
        .map(text_of)
        .ok_or(FetchError::MissingElement("tt_rec_arrow duration"))?;

    Ok(Recipe {
        input,
        output,
        duration,
    })
}

fn parse_recipe_table(doc: &Html) -> Result<Vec<Recipe>, FetchError> {
    let table_sel = selector(".pc_table");
    let row_sel = selector("tbody > tr");
    let recipe_sel = selector(".tt_recipe");

    let Some(table) = doc.select(&table_sel).next() else {
        return Ok(vec![]);
    };

    // First row is the column header.
    let mut recipes = Vec::new();
    for row in table.select(&row_sel).skip(1) {
        let cell = row
            .select(&recipe_sel)
            .next()
            .ok_or(FetchError::MissingElement("tt_recipe cell"))?;
        recipes.push(parse_recipe(cell)?);
    }

    Ok(recipes)
}

/// Parse a full item page. Pages without an `.item_panel` (raw resources
/// with no crafting panel) yield a bare item carrying only the name.
pub fn parse_item_page(html: &str) -> Result<Item, FetchError> {
    let doc = Html::parse_document(html);

    let heading_sel = selector("#firstHeading");
    let panel_sel = selector(".item_panel");
    let category_sel = selector(".tt_category");
    let desc_sel = selector(".tt_desc");

    let heading = doc
        .select(&heading_sel)
        .next()
        .ok_or(FetchError::MissingElement("firstHeading"))?;
    let name = text_of(heading).replace(' ', "_");

    let Some(panel) = doc.select(&panel_sel).next() else {
        return Ok(Item::bare(name));
    };

    let category = panel
        .select(&category_sel)
        .next()
        .map(text_of)
        .ok_or(FetchError::MissingElement("tt_category"))?;
    let description = panel
        .select(&desc_sel)
        .next()
        .map(text_of)
        .ok_or(FetchError::MissingElement("tt_desc"))?;

    Ok(Item {
        name,
        category: Some(category),
        description: Some(description),
        recipes: parse_recipe_table(&doc)?,
    })
}

/// Parse the `/Items` listing: the first table holds components, the second
/// buildings.
pub fn parse_item_list(html: &str) -> Result<ItemList, FetchError> {
    let doc = Html::parse_document(html);

    let table_sel = selector("table");
    let link_sel = selector("a");

    let mut tables = doc.select(&table_sel);
    let components = tables
        .next()
        .ok_or(FetchError::MissingElement("components table"))?;
    let buildings = tables
        .next()
        .ok_or(FetchError::MissingElement("buildings table"))?;

    let ids_of = |table: ElementRef<'_>| -> Vec<ItemId> {
        table
            .select(&link_sel)
            .filter_map(|a| a.value().attr("href"))
            .map(|href| ItemId::new(href.strip_prefix('/').unwrap_or(href)))
            .collect()
    };

    Ok(ItemList {
        components: ids_of(components),
        buildings: ids_of(buildings),
    })
}
