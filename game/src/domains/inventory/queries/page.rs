use crate::inventory::{Collection, Good, InventoryDomain};

pub const PAGE_SIZE: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq, bincode::Encode, bincode::Decode)]
pub struct GoodsPage {
    pub collection: Collection,
    pub number: usize,
    pub total: usize,
    pub goods: Vec<Good>,
}

/// Number of pages, never less than one.
pub fn total_pages(size: usize, page_size: usize) -> usize {
    let page_size = page_size.max(1);
    ((size + page_size - 1) / page_size).max(1)
}

/// Circular page turning: before the first page comes the last one and after
/// the last one comes the first.
pub fn wrap_page(number: isize, total: usize) -> usize {
    if number <= 0 {
        total
    } else if number as usize > total {
        1
    } else {
        number as usize
    }
}

/// Keeps the page the player was looking at after the collection shrank.
pub fn fit_page(number: usize, total: usize) -> usize {
    number.clamp(1, total.max(1))
}

impl InventoryDomain {
    pub fn page(&self, collection: Collection, number: isize, page_size: usize) -> GoodsPage {
        let goods = self.collection(collection);
        let page_size = page_size.max(1);
        let total = total_pages(goods.len(), page_size);
        let number = wrap_page(number, total);
        let goods = goods
            .iter()
            .skip((number - 1) * page_size)
            .take(page_size)
            .cloned()
            .collect();
        GoodsPage {
            collection,
            number,
            total,
            goods,
        }
    }
}
