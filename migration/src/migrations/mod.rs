pub mod m202608080001_create_lessons;
pub mod m202608080002_create_orders;
pub mod m202608080003_create_order_lessons;
