pub mod assign_panel;
pub mod exam_form;
pub mod exam_table;
pub mod header;
pub mod invigilator_form;
pub mod invigilator_table;
pub mod room_form;
pub mod room_list;
pub mod stats_panel;
pub mod student_form;
pub mod student_table;
