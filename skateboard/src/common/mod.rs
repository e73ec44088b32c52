pub mod consts;
pub mod jaguar;
pub mod mock_servo;
pub mod servo_out;
