//! 控制器持有的选择状态

use car_inventory_core::{BrandId, CarId};

/// 编辑模式：同一时间至多一辆车处于编辑中
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum EditMode {
    #[default]
    Idle,
    Editing(CarId),
}

impl EditMode {
    /// 对某行点击编辑：同一行回到 Idle，其他行切换为编辑该行
    #[must_use]
    pub fn toggle(&self, id: &CarId) -> Self {
        match self {
            Self::Editing(current) if current == id => Self::Idle,
            _ => Self::Editing(id.clone()),
        }
    }

    pub fn edited_car_id(&self) -> Option<&CarId> {
        match self {
            Self::Idle => None,
            Self::Editing(id) => Some(id),
        }
    }

    pub fn is_editing(&self, id: &CarId) -> bool {
        self.edited_car_id() == Some(id)
    }

    /// 若正在编辑的是该车则回到 Idle
    pub fn clear_if(&mut self, id: &CarId) {
        if self.is_editing(id) {
            *self = Self::Idle;
        }
    }
}

/// 选择状态
#[derive(Debug, Clone, Default)]
pub struct SelectionState {
    /// `None` 表示不筛选品牌
    pub selected_brand_id: Option<BrandId>,
    pub edit: EditMode,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_same_row_twice_returns_to_idle() {
        let id = CarId::from("c1");
        let editing = EditMode::Idle.toggle(&id);
        assert_eq!(editing, EditMode::Editing(id.clone()));
        assert_eq!(editing.toggle(&id), EditMode::Idle);
    }

    #[test]
    fn toggle_other_row_switches_target() {
        let mode = EditMode::Editing(CarId::from("c1")).toggle(&CarId::from("c2"));
        assert_eq!(mode.edited_car_id(), Some(&CarId::from("c2")));
    }

    #[test]
    fn clear_if_only_clears_matching_car() {
        let mut mode = EditMode::Editing(CarId::from("c1"));
        mode.clear_if(&CarId::from("c2"));
        assert!(mode.is_editing(&CarId::from("c1")));
        mode.clear_if(&CarId::from("c1"));
        assert_eq!(mode, EditMode::Idle);
    }
}
