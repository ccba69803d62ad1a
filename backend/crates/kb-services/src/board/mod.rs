pub mod column_lane;
pub mod kanban_board;
